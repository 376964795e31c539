//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod intensity;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SessionId, UserId};
pub use intensity::Intensity;
pub use timestamp::Timestamp;
