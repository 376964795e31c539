//! DeleteSessionHandler - Command handler for removing a session entirely.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::SessionError;
use crate::ports::{SessionReader, SessionRepository};

use super::load_owned;

/// Command to delete a session.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
}

/// Handler for deleting sessions. There is no soft delete.
pub struct DeleteSessionHandler {
    reader: Arc<dyn SessionReader>,
    repository: Arc<dyn SessionRepository>,
}

impl DeleteSessionHandler {
    pub fn new(reader: Arc<dyn SessionReader>, repository: Arc<dyn SessionRepository>) -> Self {
        Self { reader, repository }
    }

    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), SessionError> {
        // 1. Load and check ownership
        load_owned(self.reader.as_ref(), &cmd.session_id, &cmd.user_id).await?;

        // 2. Remove
        if !self.repository.delete(&cmd.session_id).await? {
            return Err(SessionError::not_found(cmd.session_id));
        }

        tracing::info!(session_id = %cmd.session_id, "Session deleted");
        Ok(())
    }
}
