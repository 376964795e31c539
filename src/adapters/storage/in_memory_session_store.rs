//! In-Memory Session Store Adapter
//!
//! Holds sessions in a map behind an async lock.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;
use crate::ports::{batch_order, SessionFilter, SessionReader, SessionRepository};

/// In-memory storage for session aggregates
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with sessions
    pub fn with_sessions(sessions: impl IntoIterator<Item = Session>) -> Self {
        let map = sessions.into_iter().map(|s| (*s.id(), s)).collect();
        Self {
            sessions: Arc::new(RwLock::new(map)),
        }
    }

    /// Get the number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionReader for InMemorySessionStore {
    async fn load_session(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn load_sessions(&self, filter: &SessionFilter) -> Result<Vec<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        let mut matched: Vec<Session> = sessions
            .values()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        matched.sort_by(batch_order);
        Ok(matched)
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(*session.id(), session.clone());
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }
}
