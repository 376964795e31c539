//! ClearAssessmentHandler - Command handler for removing one sub-assessment.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentKind, SubAssessment};
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::SessionError;
use crate::ports::{SessionReader, SessionRepository};

use super::load_owned;

/// Command to clear a sub-assessment from a session.
#[derive(Debug, Clone)]
pub struct ClearAssessmentCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub kind: AssessmentKind,
}

pub struct ClearAssessmentHandler {
    reader: Arc<dyn SessionReader>,
    repository: Arc<dyn SessionRepository>,
}

impl ClearAssessmentHandler {
    pub fn new(reader: Arc<dyn SessionReader>, repository: Arc<dyn SessionRepository>) -> Self {
        Self { reader, repository }
    }

    /// Returns the removed value; clearing an absent kind is a no-op.
    pub async fn handle(
        &self,
        cmd: ClearAssessmentCommand,
    ) -> Result<Option<SubAssessment>, SessionError> {
        let mut session = load_owned(self.reader.as_ref(), &cmd.session_id, &cmd.user_id).await?;

        let removed = session.clear(cmd.kind);
        if removed.is_some() {
            self.repository.save(&session).await?;
            tracing::info!(session_id = %cmd.session_id, kind = %cmd.kind, "Sub-assessment cleared");
        }

        Ok(removed)
    }
}
