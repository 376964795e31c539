//! Session lifecycle command handlers.

mod clear_assessment;
mod create_session;
mod delete_session;
mod record_ai_interaction;
mod record_assessment;

pub use clear_assessment::{ClearAssessmentCommand, ClearAssessmentHandler};
pub use create_session::{CreateSessionCommand, CreateSessionHandler, CreateSessionResult};
pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler};
pub use record_ai_interaction::{RecordAiInteractionCommand, RecordAiInteractionHandler};
pub use record_assessment::{
    RecordAssessmentCommand, RecordAssessmentHandler, RecordAssessmentResult,
};

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionReader;

/// Loads a session for a write by its owner.
///
/// A session owned by someone else is reported as not found.
pub(crate) async fn load_owned(
    reader: &dyn SessionReader,
    session_id: &SessionId,
    user_id: &UserId,
) -> Result<Session, SessionError> {
    let session = reader
        .load_session(session_id)
        .await?
        .ok_or_else(|| SessionError::not_found(*session_id))?;

    if !session.is_owner(user_id) {
        tracing::warn!(session_id = %session_id, "Session accessed by non-owner");
        return Err(SessionError::not_found(*session_id));
    }
    Ok(session)
}
