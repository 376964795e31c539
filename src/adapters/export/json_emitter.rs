//! Structured-data emitter.
//!
//! Serializes the full aggregate rather than the projection, so nothing is
//! substituted: absent sub-assessments and optional fields are omitted keys
//! and timestamps stay ISO-8601. A single session becomes an object and a
//! batch becomes an array.

use crate::ports::{ExportFormat, ExportInput, RenderError, SessionEmitter};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter;

impl JsonEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl SessionEmitter for JsonEmitter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, input: ExportInput<'_>) -> Result<Vec<u8>, RenderError> {
        let bytes = match input {
            ExportInput::Single(session) => serde_json::to_vec_pretty(session)?,
            ExportInput::Collection(sessions) => serde_json::to_vec_pretty(sessions)?,
        };
        Ok(bytes)
    }
}
