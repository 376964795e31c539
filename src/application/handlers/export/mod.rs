//! Export query handlers.

mod export_session;
mod export_sessions;

pub use export_session::{ExportSessionHandler, ExportSessionQuery};
pub use export_sessions::{ExportSessionsHandler, ExportSessionsQuery};
