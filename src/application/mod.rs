//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write sessions; query handlers read snapshots for export.

pub mod handlers;

pub use handlers::{
    // Session handlers
    ClearAssessmentCommand, ClearAssessmentHandler,
    CreateSessionCommand, CreateSessionHandler, CreateSessionResult,
    DeleteSessionCommand, DeleteSessionHandler,
    RecordAiInteractionCommand, RecordAiInteractionHandler,
    RecordAssessmentCommand, RecordAssessmentHandler, RecordAssessmentResult,
    // Export handlers
    ExportSessionHandler, ExportSessionQuery,
    ExportSessionsHandler, ExportSessionsQuery,
};
