//! CreateSessionHandler - Command handler for starting a session.

use std::sync::Arc;

use crate::domain::assessment::SubAssessment;
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Command to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub user_id: UserId,
    /// Sub-assessment completed in the first interaction, if any.
    pub initial: Option<SubAssessment>,
}

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateSessionResult {
    pub session: Session,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<CreateSessionResult, SessionError> {
        // 1. Create session aggregate
        let mut session = Session::new(SessionId::new(), cmd.user_id);

        // 2. Apply the initial sub-assessment, validating it
        if let Some(initial) = cmd.initial {
            session.record(initial)?;
        }

        // 3. Persist session
        self.repository.save(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            kinds = session.present_kinds().len(),
            "Session created"
        );

        Ok(CreateSessionResult { session })
    }
}
