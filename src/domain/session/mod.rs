//! Session domain module.
//!
//! Handles the session aggregate lifecycle: creation, recording or
//! replacing sub-assessments, and AI insight history. Deletion is a store
//! operation and leaves no trace in the domain.

mod aggregate;
mod ai_interaction;
mod errors;

#[cfg(test)]
pub(crate) mod strategies;

pub use aggregate::Session;
pub use ai_interaction::AiInteraction;
pub use errors::SessionError;
