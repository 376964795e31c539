//! Export Adapters
//!
//! Emitters for the `SessionEmitter` port and the façade that picks one.
//!
//! ## Available Emitters
//!
//! - **JsonEmitter** - Full aggregate as pretty-printed JSON
//! - **WorkbookEmitter** - XLSX workbook via `rust_xlsxwriter`
//! - **DocumentEmitter** - Paginated PDF via `lopdf`

mod document_emitter;
mod json_emitter;
mod session_exporter;
mod settings;
mod workbook_emitter;

pub use document_emitter::{DocumentEmitter, DocumentLayout, LineKind, Page, PlacedLine};
pub use json_emitter::JsonEmitter;
pub use session_exporter::SessionExporter;
pub use settings::{DocumentStyle, ExportSettings, PageSize, DEFAULT_FILENAME_PREFIX};
pub use workbook_emitter::{
    Cell, SheetPlan, WorkbookEmitter, WorkbookPlan, AI_INSIGHTS_SHEET, MAX_CELL_CHARS,
    SUMMARY_SHEET,
};
