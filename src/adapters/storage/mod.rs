//! Storage Adapters
//!
//! Implementations of the `SessionReader` and `SessionRepository` ports.
//!
//! ## Available Adapters
//!
//! - **JsonFileSessionStore** - All sessions in one JSON file on disk
//! - **InMemorySessionStore** - Sessions in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemorySessionStore, JsonFileSessionStore};
//!
//! // Production: file-based storage
//! let store = JsonFileSessionStore::open("./data").await?;
//!
//! // Testing: in-memory storage
//! let store = InMemorySessionStore::new();
//! ```

mod in_memory_session_store;
mod json_file_session_store;

pub use in_memory_session_store::InMemorySessionStore;
pub use json_file_session_store::{JsonFileSessionStore, SESSIONS_FILE};
