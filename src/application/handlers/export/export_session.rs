//! ExportSessionHandler - Query handler exporting one session.

use std::sync::Arc;

use crate::adapters::export::SessionExporter;
use crate::domain::foundation::{SessionId, Timestamp, UserId};
use crate::ports::{ExportError, ExportFormat, ExportInput, ExportedDocument, SessionReader};

/// Query to export a single session.
#[derive(Debug, Clone)]
pub struct ExportSessionQuery {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub format: ExportFormat,
}

/// Handler for single-session exports.
pub struct ExportSessionHandler {
    reader: Arc<dyn SessionReader>,
    exporter: Arc<SessionExporter>,
}

impl ExportSessionHandler {
    pub fn new(reader: Arc<dyn SessionReader>, exporter: Arc<SessionExporter>) -> Self {
        Self { reader, exporter }
    }

    pub async fn handle(&self, query: ExportSessionQuery) -> Result<ExportedDocument, ExportError> {
        // 1. Snapshot the session
        let session = self
            .reader
            .load_session(&query.session_id)
            .await?
            .ok_or(ExportError::NotFound(query.session_id))?;

        // 2. Sessions of other users are reported as missing
        if !session.is_owner(&query.user_id) {
            tracing::warn!(session_id = %query.session_id, "Export requested by non-owner");
            return Err(ExportError::NotFound(query.session_id));
        }

        tracing::debug!(
            session_id = %query.session_id,
            format = %query.format,
            kinds = session.present_kinds().len(),
            "Exporting session"
        );

        // 3. Render
        self.exporter
            .export(query.format, ExportInput::Single(&session), Timestamp::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::assessment::{Emotions, FeelingsDial};
    use crate::domain::foundation::DomainError;
    use crate::domain::session::Session;
    use crate::ports::SessionFilter;
    use async_trait::async_trait;

    fn owner() -> UserId {
        UserId::new("owner").unwrap()
    }

    fn stored_session() -> (Session, Arc<InMemorySessionStore>) {
        let mut session = Session::new(SessionId::new(), owner());
        session
            .record(FeelingsDial::new(Emotions::from_ratings([3, 7, 2, 1, 5, 8]).unwrap()).into())
            .unwrap();
        let store = Arc::new(InMemorySessionStore::with_sessions([session.clone()]));
        (session, store)
    }

    #[tokio::test]
    async fn exports_owned_session_in_each_format() {
        let (session, store) = stored_session();
        let handler = ExportSessionHandler::new(store, Arc::new(SessionExporter::default()));

        for format in ExportFormat::ALL {
            let doc = handler
                .handle(ExportSessionQuery {
                    session_id: *session.id(),
                    user_id: owner(),
                    format,
                })
                .await
                .unwrap();
            assert_eq!(doc.format, format);
            assert!(doc.filename.starts_with("feel-and-grow-rich-export-"));
        }
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let (_, store) = stored_session();
        let handler = ExportSessionHandler::new(store, Arc::new(SessionExporter::default()));
        let missing = SessionId::new();

        let result = handler
            .handle(ExportSessionQuery {
                session_id: missing,
                user_id: owner(),
                format: ExportFormat::Json,
            })
            .await;

        assert!(matches!(result, Err(ExportError::NotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn non_owner_is_not_found() {
        let (session, store) = stored_session();
        let handler = ExportSessionHandler::new(store, Arc::new(SessionExporter::default()));

        let result = handler
            .handle(ExportSessionQuery {
                session_id: *session.id(),
                user_id: UserId::new("someone-else").unwrap(),
                format: ExportFormat::Pdf,
            })
            .await;

        assert!(matches!(result, Err(ExportError::NotFound(_))));
    }

    struct FailingReader;

    #[async_trait]
    impl SessionReader for FailingReader {
        async fn load_session(&self, _id: &SessionId) -> Result<Option<Session>, DomainError> {
            Err(DomainError::storage("Simulated read failure"))
        }

        async fn load_sessions(&self, _filter: &SessionFilter) -> Result<Vec<Session>, DomainError> {
            Err(DomainError::storage("Simulated read failure"))
        }
    }

    #[tokio::test]
    async fn storage_failure_is_surfaced() {
        let handler = ExportSessionHandler::new(
            Arc::new(FailingReader),
            Arc::new(SessionExporter::default()),
        );

        let result = handler
            .handle(ExportSessionQuery {
                session_id: SessionId::new(),
                user_id: owner(),
                format: ExportFormat::Xlsx,
            })
            .await;

        assert!(matches!(result, Err(ExportError::Storage(_))));
    }
}
