//! RecordAssessmentHandler - Command handler for saving a sub-assessment.

use std::sync::Arc;

use crate::domain::assessment::SubAssessment;
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::{Session, SessionError};
use crate::ports::{SessionReader, SessionRepository};

use super::load_owned;

/// Command to set or replace one sub-assessment.
#[derive(Debug, Clone)]
pub struct RecordAssessmentCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub assessment: SubAssessment,
}

/// Result of a successful write.
#[derive(Debug, Clone)]
pub struct RecordAssessmentResult {
    pub session: Session,
    /// Value this write replaced, if the kind was already present.
    pub previous: Option<SubAssessment>,
}

/// Handler for workflow steps that complete a sub-assessment.
pub struct RecordAssessmentHandler {
    reader: Arc<dyn SessionReader>,
    repository: Arc<dyn SessionRepository>,
}

impl RecordAssessmentHandler {
    pub fn new(reader: Arc<dyn SessionReader>, repository: Arc<dyn SessionRepository>) -> Self {
        Self { reader, repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordAssessmentCommand,
    ) -> Result<RecordAssessmentResult, SessionError> {
        let kind = cmd.assessment.kind();

        // 1. Load session
        let mut session = load_owned(self.reader.as_ref(), &cmd.session_id, &cmd.user_id).await?;

        // 2. Validate and replace wholesale
        let previous = session.record(cmd.assessment)?;

        // 3. Persist
        self.repository.save(&session).await?;

        tracing::info!(
            session_id = %cmd.session_id,
            kind = %kind,
            replaced = previous.is_some(),
            "Sub-assessment recorded"
        );

        Ok(RecordAssessmentResult { session, previous })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::assessment::{Emotions, FeelingsDial, HillOverlay, Intake};
    use crate::domain::foundation::DomainError;
    use async_trait::async_trait;

    fn owner() -> UserId {
        UserId::new("owner").unwrap()
    }

    fn setup() -> (RecordAssessmentHandler, Arc<InMemorySessionStore>, Session) {
        let session = Session::new(SessionId::new(), owner());
        let store = Arc::new(InMemorySessionStore::with_sessions([session.clone()]));
        (
            RecordAssessmentHandler::new(store.clone(), store.clone()),
            store,
            session,
        )
    }

    #[tokio::test]
    async fn records_and_persists_assessment() {
        let (handler, store, session) = setup();

        let result = handler
            .handle(RecordAssessmentCommand {
                session_id: *session.id(),
                user_id: owner(),
                assessment: HillOverlay::new("Faith", "call mentor").into(),
            })
            .await
            .unwrap();

        assert!(result.previous.is_none());
        let stored = store.load_session(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.hill_overlay().unwrap().principle, "Faith");
        assert!(!stored.updated_at().is_before(session.updated_at()));
    }

    #[tokio::test]
    async fn replaces_previous_value_wholesale() {
        let (handler, store, session) = setup();
        let first = FeelingsDial {
            reflections: Some("tense".into()),
            ..FeelingsDial::new(Emotions::from_ratings([9, 0, 0, 0, 0, 0]).unwrap())
        };
        let second = FeelingsDial::new(Emotions::from_ratings([1, 0, 0, 0, 0, 0]).unwrap());

        for dial in [first.clone(), second.clone()] {
            handler
                .handle(RecordAssessmentCommand {
                    session_id: *session.id(),
                    user_id: owner(),
                    assessment: dial.into(),
                })
                .await
                .unwrap();
        }

        let stored = store.load_session(session.id()).await.unwrap().unwrap();
        // No merge: reflections from the first write are gone.
        assert_eq!(stored.feelings_dial(), Some(&second));
    }

    #[tokio::test]
    async fn rejects_invalid_assessment() {
        let (handler, store, session) = setup();

        let result = handler
            .handle(RecordAssessmentCommand {
                session_id: *session.id(),
                user_id: owner(),
                assessment: Intake::new("Ada", false).into(),
            })
            .await;

        assert!(matches!(result, Err(SessionError::ValidationFailed { .. })));
        let stored = store.load_session(session.id()).await.unwrap().unwrap();
        assert!(stored.intake().is_none());
    }

    #[tokio::test]
    async fn non_owner_gets_not_found() {
        let (handler, _, session) = setup();

        let result = handler
            .handle(RecordAssessmentCommand {
                session_id: *session.id(),
                user_id: UserId::new("someone-else").unwrap(),
                assessment: Intake::new("Ada", true).into(),
            })
            .await;

        assert!(matches!(result, Err(SessionError::NotFound(_))));
    }

    struct FailingReader;

    #[async_trait]
    impl SessionReader for FailingReader {
        async fn load_session(&self, _id: &SessionId) -> Result<Option<Session>, DomainError> {
            Err(DomainError::storage("Simulated read failure"))
        }

        async fn load_sessions(
            &self,
            _filter: &crate::ports::SessionFilter,
        ) -> Result<Vec<Session>, DomainError> {
            Err(DomainError::storage("Simulated read failure"))
        }
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure_error() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = RecordAssessmentHandler::new(Arc::new(FailingReader), store);

        let result = handler
            .handle(RecordAssessmentCommand {
                session_id: SessionId::new(),
                user_id: owner(),
                assessment: Intake::new("Ada", true).into(),
            })
            .await;

        assert!(matches!(result, Err(SessionError::Infrastructure(_))));
    }
}
