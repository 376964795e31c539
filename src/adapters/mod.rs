//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session stores (in-memory, JSON file)
//! - `export` - JSON, XLSX and PDF emitters plus the export façade

pub mod export;
pub mod storage;

pub use export::{
    DocumentEmitter, ExportSettings, JsonEmitter, SessionExporter, WorkbookEmitter,
};
pub use storage::{InMemorySessionStore, JsonFileSessionStore};
