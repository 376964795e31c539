//! Session repository port (write side).
//!
//! Defines the contract for persisting Session aggregates. Sub-assessment
//! writes replace the whole stored aggregate; deletion is hard.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;
use async_trait::async_trait;

/// Repository port for Session aggregate persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert or replace a session.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Remove a session entirely.
    ///
    /// Returns `false` if no session had that id.
    async fn delete(&self, id: &SessionId) -> Result<bool, DomainError>;
}
