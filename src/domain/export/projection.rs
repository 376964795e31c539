//! Format-neutral view of a session.
//!
//! `project` turns a [`Session`] into an ordered list of [`Section`]s, one per
//! present sub-assessment, in [`AssessmentKind::ALL`] order. Absent
//! sub-assessments produce no section at all. Projection is total: it never
//! fails on a well-typed session.

use super::descriptor::{descriptor, SECTIONS};
use crate::domain::assessment::AssessmentKind;
use crate::domain::foundation::{SessionId, Timestamp, UserId};
use crate::domain::session::Session;

/// A single renderable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    /// Enum tag in its declared casing (`fear_of_failure`).
    Tag(&'static str),
    Integer(i64),
    Number(f64),
    Flag(bool),
    Timestamp(Timestamp),
    /// Seconds.
    Duration(u64),
    List(Vec<ListEntry>),
    Missing,
}

impl Value {
    /// Free text, treating blank strings as missing.
    pub fn text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Value::Missing
        } else {
            Value::Text(raw.to_string())
        }
    }

    pub fn optional_text(raw: Option<&str>) -> Self {
        raw.map_or(Value::Missing, Value::text)
    }

    pub fn optional_timestamp(ts: Option<&Timestamp>) -> Self {
        ts.copied().map_or(Value::Missing, Value::Timestamp)
    }

    pub fn optional_number(n: Option<f64>) -> Self {
        match n {
            Some(n) if n.is_finite() => Value::Number(n),
            _ => Value::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::List(entries) => entries.is_empty(),
            _ => false,
        }
    }
}

/// One element of a list value, with an optional secondary line.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub value: Value,
    pub note: Option<String>,
}

impl ListEntry {
    pub fn new(value: Value) -> Self {
        Self { value, note: None }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Which outputs render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    All,
    TabularOnly,
    NarrativeOnly,
}

/// What the narrative does with a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhenMissing {
    /// Print the `N/A` placeholder.
    Placeholder,
    /// Skip the line.
    Elide,
}

/// Labeled value inside a section or record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: Value,
    pub audience: Audience,
    pub when_missing: WhenMissing,
}

impl Field {
    pub fn new(label: &'static str, value: Value) -> Self {
        Self {
            label,
            value,
            audience: Audience::All,
            when_missing: WhenMissing::Placeholder,
        }
    }

    pub fn tabular_only(mut self) -> Self {
        self.audience = Audience::TabularOnly;
        self
    }

    pub fn narrative_only(mut self) -> Self {
        self.audience = Audience::NarrativeOnly;
        self
    }

    pub fn elide_when_missing(mut self) -> Self {
        self.when_missing = WhenMissing::Elide;
        self
    }

    pub fn is_tabular(&self) -> bool {
        self.audience != Audience::NarrativeOnly
    }

    pub fn is_narrative(&self) -> bool {
        self.audience != Audience::TabularOnly
    }
}

/// A repeated row (one belief-map item).
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub fields: Vec<Field>,
}

impl Record {
    pub fn field(&self, label: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.label == label)
    }
}

/// Fields and rows produced by one section projector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionBody {
    pub fields: Vec<Field>,
    pub records: Vec<Record>,
}

/// The projection of one present sub-assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: AssessmentKind,
    pub title: &'static str,
    pub fields: Vec<Field>,
    pub records: Vec<Record>,
}

impl Section {
    pub fn field(&self, label: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.label == label)
    }
}

/// Identity metadata and the ordered sections of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionProjection {
    pub id: SessionId,
    pub owner: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub sections: Vec<Section>,
}

impl SessionProjection {
    pub fn section(&self, kind: AssessmentKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn has(&self, kind: AssessmentKind) -> bool {
        self.section(kind).is_some()
    }
}

/// Projects one session.
pub fn project(session: &Session) -> SessionProjection {
    let sections = SECTIONS
        .iter()
        .filter_map(|d| {
            (d.project)(session).map(|body| Section {
                kind: d.kind,
                title: d.title,
                fields: body.fields,
                records: body.records,
            })
        })
        .collect();

    SessionProjection {
        id: *session.id(),
        owner: session.user_id().clone(),
        created_at: *session.created_at(),
        updated_at: *session.updated_at(),
        sections,
    }
}

/// Projects a batch, preserving input order.
pub fn project_all(sessions: &[Session]) -> Vec<SessionProjection> {
    sessions.iter().map(project).collect()
}

/// Kinds present in at least one projection, in fixed order.
pub fn kinds_present(projections: &[SessionProjection]) -> Vec<AssessmentKind> {
    AssessmentKind::ALL
        .into_iter()
        .filter(|kind| projections.iter().any(|p| p.has(*kind)))
        .collect()
}

/// Narrative title for a kind, whether or not it is present.
pub fn section_title(kind: AssessmentKind) -> &'static str {
    descriptor(kind).title
}
