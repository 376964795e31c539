//! Session Export Port - multi-format rendering interface.
//!
//! Each emitter turns one session or an ordered batch into a byte buffer
//! in its format. Rendering is pure and synchronous: the caller loads the
//! snapshot first, so nothing here touches storage.

use crate::domain::foundation::{DomainError, SessionId, Timestamp};
use crate::domain::session::Session;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for rendering sessions into one output format.
///
/// # Contract
///
/// Implementations must:
/// - Be deterministic: the same input renders byte-identical output
/// - Omit absent sub-assessments rather than render empty placeholders
/// - Return an error instead of a partial buffer on backend failure
pub trait SessionEmitter: Send + Sync {
    /// The format this emitter produces.
    fn format(&self) -> ExportFormat;

    /// Render the input to bytes.
    fn render(&self, input: ExportInput<'_>) -> Result<Vec<u8>, RenderError>;
}

/// One session or an ordered batch.
#[derive(Debug, Clone, Copy)]
pub enum ExportInput<'a> {
    Single(&'a Session),
    Collection(&'a [Session]),
}

impl<'a> ExportInput<'a> {
    /// The sessions in render order.
    pub fn sessions(&self) -> &'a [Session] {
        match *self {
            ExportInput::Single(session) => std::slice::from_ref(session),
            ExportInput::Collection(sessions) => sessions,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, ExportInput::Collection(_))
    }

    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions().is_empty()
    }

    /// Latest `updated_at` in the input, if any.
    pub fn last_updated(&self) -> Option<Timestamp> {
        self.sessions().iter().map(|s| *s.updated_at()).max()
    }
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Structured-data dump of the full aggregate.
    Json,
    /// Spreadsheet workbook.
    Xlsx,
    /// Paginated PDF document.
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Xlsx, ExportFormat::Pdf];

    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "xlsx" | "excel" | "spreadsheet" => Ok(ExportFormat::Xlsx),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Wraps rendered bytes, naming the file `<prefix>-export-<millis>.<ext>`.
    pub fn new(content: Vec<u8>, format: ExportFormat, prefix: &str, generated_at: Timestamp) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: export_filename(prefix, format, generated_at),
            format,
        }
    }
}

/// Suggested download name for an export generated at `generated_at`.
pub fn export_filename(prefix: &str, format: ExportFormat, generated_at: Timestamp) -> String {
    format!(
        "{}-export-{}.{}",
        prefix,
        generated_at.as_unix_millis(),
        format.extension()
    )
}

/// Backend failure while encoding an export.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workbook encoding failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("PDF encoding failed: {0}")]
    Document(#[from] lopdf::Error),

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during session export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Session does not exist or is not owned by the caller.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Loading the snapshot failed.
    #[error("Failed to load sessions: {0}")]
    Storage(DomainError),

    /// An emitter backend failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ExportError {
    /// Machine-readable code for callers mapping errors to responses.
    pub fn code(&self) -> &'static str {
        match self {
            ExportError::NotFound(_) => "SESSION_NOT_FOUND",
            ExportError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ExportError::Storage(_) => "STORAGE_ERROR",
            ExportError::Render(_) => "RENDER_ERROR",
        }
    }
}

impl From<DomainError> for ExportError {
    fn from(err: DomainError) -> Self {
        ExportError::Storage(err)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
