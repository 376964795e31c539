//! JSON File Session Store Adapter
//!
//! Persists every session in a single `sessions.json` array under a data
//! directory. The file is read once at `open` and rewritten after every
//! change using a write-to-temp-then-rename pattern.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;
use crate::ports::{batch_order, SessionFilter, SessionReader, SessionRepository};

/// File name of the session store inside the data directory.
pub const SESSIONS_FILE: &str = "sessions.json";

/// File-backed storage for session aggregates
#[derive(Debug)]
pub struct JsonFileSessionStore {
    path: PathBuf,
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl JsonFileSessionStore {
    /// Open the store in `data_dir`, creating the directory if needed.
    ///
    /// A missing file starts an empty store.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let path = dir.join(SESSIONS_FILE);
        let sessions = match fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => Vec::new(),
            Ok(raw) => serde_json::from_str::<Vec<Session>>(&raw).map_err(|e| {
                DomainError::storage(format!("Corrupt session file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        tracing::debug!(path = %path.display(), count = sessions.len(), "Opened session store");

        Ok(Self {
            path,
            sessions: RwLock::new(sessions.into_iter().map(|s| (*s.id(), s)).collect()),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Rewrites the file from the given map.
    async fn persist(&self, sessions: &HashMap<SessionId, Session>) -> Result<(), DomainError> {
        let mut ordered: Vec<&Session> = sessions.values().collect();
        ordered.sort_by(|a, b| batch_order(a, b));

        let json = serde_json::to_string_pretty(&ordered)
            .map_err(|e| DomainError::storage(format!("Failed to encode sessions: {}", e)))?;

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        file.write_all(json.as_bytes()).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        file.sync_all().await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl SessionReader for JsonFileSessionStore {
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
impl SessionRepository for JsonFileSessionStore {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        let previous = sessions.insert(*session.id(), session.clone());
        if let Err(e) = self.persist(&sessions).await {
            // Keep memory consistent with disk.
            match previous {
                Some(prev) => sessions.insert(*session.id(), prev),
                None => sessions.remove(session.id()),
            };
            return Err(e);
        }
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        let Some(removed) = sessions.remove(id) else {
            return Ok(false);
        };
        if let Err(e) = self.persist(&sessions).await {
            sessions.insert(*id, removed);
            return Err(e);
        }
        Ok(true)
    }
}
