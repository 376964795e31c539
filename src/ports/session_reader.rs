//! Session reader port (read side).
//!
//! The export path only reads. It loads a single session by id or a
//! filtered batch, takes one snapshot, and never re-reads mid-render.

use crate::domain::foundation::{DomainError, SessionId, Timestamp, UserId};
use crate::domain::session::Session;
use async_trait::async_trait;
use std::cmp::Ordering;

/// Reader port for session snapshots.
#[async_trait]
pub trait SessionReader: Send + Sync {
    /// Load one session.
    ///
    /// Returns `None` if not found.
    async fn load_session(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Load every session matching the filter.
    ///
    /// Returns sessions ordered by `created_at`, then id.
    async fn load_sessions(&self, filter: &SessionFilter) -> Result<Vec<Session>, DomainError>;
}

/// Criteria for a batch load. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    /// Only sessions owned by this user.
    pub owner: Option<UserId>,

    /// Only sessions updated at or after this instant.
    pub updated_since: Option<Timestamp>,

    /// Only these ids.
    pub ids: Option<Vec<SessionId>>,
}

impl SessionFilter {
    /// Every session.
    pub fn all() -> Self {
        Self::default()
    }

    /// Sessions owned by a user.
    pub fn owned_by(owner: UserId) -> Self {
        Self {
            owner: Some(owner),
            ..Self::default()
        }
    }

    pub fn updated_since(mut self, at: Timestamp) -> Self {
        self.updated_since = Some(at);
        self
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = SessionId>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    /// Checks a session against every set criterion.
    pub fn matches(&self, session: &Session) -> bool {
        if let Some(owner) = &self.owner {
            if !session.is_owner(owner) {
                return false;
            }
        }
        if let Some(since) = &self.updated_since {
            if session.updated_at().is_before(since) {
                return false;
            }
        }
        if let Some(ids) = &self.ids {
            if !ids.contains(session.id()) {
                return false;
            }
        }
        true
    }
}

/// Canonical batch order: creation time, then id.
pub fn batch_order(a: &Session, b: &Session) -> Ordering {
    a.created_at()
        .cmp(b.created_at())
        .then_with(|| a.id().cmp(b.id()))
}
