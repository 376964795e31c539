//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod export;
pub mod session;

pub use export::{
    ExportSessionHandler, ExportSessionQuery, ExportSessionsHandler, ExportSessionsQuery,
};
pub use session::{
    ClearAssessmentCommand, ClearAssessmentHandler, CreateSessionCommand, CreateSessionHandler,
    CreateSessionResult, DeleteSessionCommand, DeleteSessionHandler, RecordAiInteractionCommand,
    RecordAiInteractionHandler, RecordAssessmentCommand, RecordAssessmentHandler,
    RecordAssessmentResult,
};
