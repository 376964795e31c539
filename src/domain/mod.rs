//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - The seven sub-assessment schemas and their kind tag
//! - `session` - Session aggregate and lifecycle
//! - `export` - Projection engine shared by the export emitters

pub mod assessment;
pub mod export;
pub mod foundation;
pub mod session;
