//! RecordAiInteractionHandler - Stores an AI insight exchange on a session.
//!
//! The assistant call happens elsewhere; this handler only records the
//! prompt and response it produced.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, Timestamp, UserId};
use crate::domain::session::{Session, SessionError};
use crate::ports::{SessionReader, SessionRepository};

use super::load_owned;

#[derive(Debug, Clone)]
pub struct RecordAiInteractionCommand {
    pub session_id: SessionId,
    pub user_id: UserId,
    pub prompt: String,
    pub response: String,
}

pub struct RecordAiInteractionHandler {
    reader: Arc<dyn SessionReader>,
    repository: Arc<dyn SessionRepository>,
}

impl RecordAiInteractionHandler {
    pub fn new(reader: Arc<dyn SessionReader>, repository: Arc<dyn SessionRepository>) -> Self {
        Self { reader, repository }
    }

    pub async fn handle(&self, cmd: RecordAiInteractionCommand) -> Result<Session, SessionError> {
        let mut session = load_owned(self.reader.as_ref(), &cmd.session_id, &cmd.user_id).await?;

        session.record_ai_interaction(cmd.prompt, cmd.response, Timestamp::now())?;
        self.repository.save(&session).await?;

        tracing::debug!(
            session_id = %cmd.session_id,
            interactions = session.ai_interactions().len(),
            "AI interaction recorded"
        );

        Ok(session)
    }
}
