//! Export module - the projection engine.
//!
//! Maps sessions into a format-neutral [`SessionProjection`] that the
//! structured, tabular and narrative emitters all consume.

mod descriptor;
mod format;
mod projection;

pub use descriptor::{descriptor, RowLayout, SectionDescriptor, SECTIONS};
pub use format::{
    duration_text, join_connections, number_text, scalar_text, tag_text, title_case, yes_no,
    DisplaySettings, TextStyle, DEFAULT_DATETIME_FORMAT, NOT_AVAILABLE, NO_CONNECTIONS,
};
pub use projection::{
    kinds_present, project, project_all, section_title, Audience, Field, ListEntry, Record,
    Section, SectionBody, SessionProjection, Value, WhenMissing,
};
