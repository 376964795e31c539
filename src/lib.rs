//! Feel and Grow Rich - Session records and multi-format export
//!
//! A session groups the seven sub-assessments of the journey (intake, belief
//! map, triangle shift, six fears, feelings dial, hill overlay, daily 10) and
//! the AI insights gathered along the way. Sessions export to JSON, a
//! multi-sheet XLSX workbook, or a paginated PDF narrative.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
