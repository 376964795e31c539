//! ExportSessionsHandler - Query handler exporting a user's sessions as a batch.

use std::sync::Arc;

use crate::adapters::export::SessionExporter;
use crate::domain::foundation::{SessionId, Timestamp, UserId};
use crate::ports::{
    ExportError, ExportFormat, ExportInput, ExportedDocument, SessionFilter, SessionReader,
};

/// Query to export many sessions of one user.
#[derive(Debug, Clone)]
pub struct ExportSessionsQuery {
    pub user_id: UserId,
    pub format: ExportFormat,
    /// Only sessions updated at or after this instant.
    pub updated_since: Option<Timestamp>,
    /// Only these sessions; `None` exports all of the user's sessions.
    pub session_ids: Option<Vec<SessionId>>,
}

impl ExportSessionsQuery {
    /// Every session of a user.
    pub fn all(user_id: UserId, format: ExportFormat) -> Self {
        Self {
            user_id,
            format,
            updated_since: None,
            session_ids: None,
        }
    }
}

/// Handler for batch exports.
pub struct ExportSessionsHandler {
    reader: Arc<dyn SessionReader>,
    exporter: Arc<SessionExporter>,
}

impl ExportSessionsHandler {
    pub fn new(reader: Arc<dyn SessionReader>, exporter: Arc<SessionExporter>) -> Self {
        Self { reader, exporter }
    }

    pub async fn handle(&self, query: ExportSessionsQuery) -> Result<ExportedDocument, ExportError> {
        // Owner is always part of the filter.
        let filter = SessionFilter {
            owner: Some(query.user_id.clone()),
            updated_since: query.updated_since,
            ids: query.session_ids.clone(),
        };

        let sessions = self.reader.load_sessions(&filter).await?;

        // A requested id that is missing or belongs to someone else.
        if let Some(ids) = &query.session_ids {
            if let Some(missing) = ids.iter().find(|id| !sessions.iter().any(|s| s.id() == *id)) {
                tracing::warn!(session_id = %missing, "Batch export referenced unknown session");
                return Err(ExportError::NotFound(*missing));
            }
        }

        tracing::debug!(
            user_id = %query.user_id.as_str(),
            sessions = sessions.len(),
            format = %query.format,
            "Exporting session batch"
        );

        self.exporter.export(
            query.format,
            ExportInput::Collection(&sessions),
            Timestamp::now(),
        )
    }
}
