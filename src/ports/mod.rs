//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `SessionReader` - Snapshot reads used by the export path
//! - `SessionRepository` - Whole-aggregate writes and hard delete
//!
//! ## Export Ports
//!
//! - `SessionEmitter` - One output format (JSON, XLSX, PDF)

mod session_exporter;
mod session_reader;
mod session_repository;

pub use session_exporter::{
    export_filename, ExportError, ExportFormat, ExportInput, ExportedDocument, RenderError,
    SessionEmitter,
};
pub use session_reader::{batch_order, SessionFilter, SessionReader};
pub use session_repository::SessionRepository;
