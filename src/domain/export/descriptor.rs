//! Declarative section table shared by every emitter.
//!
//! One [`SectionDescriptor`] per sub-assessment kind, in fixed order. The
//! descriptor names the narrative heading, the workbook sheet, the sheet's
//! columns and the projector that reads the kind out of a session. Emitters
//! never inspect sub-assessments directly.

use super::format::join_connections;
use super::projection::{Field, ListEntry, Record, SectionBody, Value};
use crate::domain::assessment::{
    AssessmentKind, BeliefMap, DailyPractice, Emotion, FeelingsDial, HillOverlay, Intake, SixFears,
    TriangleShift, DAILY_PROMPTS,
};
use crate::domain::session::Session;

/// How a section maps onto worksheet rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    /// One row per session from the section's fields.
    PerSession,
    /// One row per record (belief-map item).
    PerItem,
}

pub struct SectionDescriptor {
    pub kind: AssessmentKind,
    /// Narrative heading.
    pub title: &'static str,
    pub sheet_name: &'static str,
    pub layout: RowLayout,
    /// Tabular column labels, excluding the leading session id.
    pub columns: &'static [&'static str],
    pub project: fn(&Session) -> Option<SectionBody>,
}

impl std::fmt::Debug for SectionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionDescriptor")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("sheet_name", &self.sheet_name)
            .field("layout", &self.layout)
            .finish()
    }
}

pub static SECTIONS: [SectionDescriptor; 7] = [
    SectionDescriptor {
        kind: AssessmentKind::Intake,
        title: "Intake Assessment",
        sheet_name: "Intake",
        layout: RowLayout::PerSession,
        columns: &[
            "Name",
            "Birth Date",
            "Birth Time",
            "Birth Place",
            "Consent",
            "Conditions of Life",
            "Loop to Break",
        ],
        project: |s| s.intake().map(intake),
    },
    SectionDescriptor {
        kind: AssessmentKind::BeliefMap,
        title: "Belief Mapper",
        sheet_name: "Belief Map",
        layout: RowLayout::PerItem,
        columns: &["Item ID", "Type", "Content", "X", "Y", "Connected To"],
        project: |s| s.belief_map().map(belief_map),
    },
    SectionDescriptor {
        kind: AssessmentKind::TriangleShift,
        title: "Triangle Shift",
        sheet_name: "Triangle Shift",
        layout: RowLayout::PerSession,
        columns: &["Current Role", "Situation", "Transformed Role", "New Perspective"],
        project: |s| s.triangle_shift().map(triangle_shift),
    },
    SectionDescriptor {
        kind: AssessmentKind::SixFears,
        title: "Six Fears Assessment",
        sheet_name: "Six Fears",
        layout: RowLayout::PerSession,
        columns: &["Fears", "Notes"],
        project: |s| s.six_fears().map(six_fears),
    },
    SectionDescriptor {
        kind: AssessmentKind::FeelingsDial,
        title: "Feelings Dial",
        sheet_name: "Feelings Dial",
        layout: RowLayout::PerSession,
        columns: &[
            "Anger",
            "Sadness",
            "Guilt",
            "Shame",
            "Fear",
            "Joy",
            "Sit Completed At",
            "Reflections",
        ],
        project: |s| s.feelings_dial().map(feelings_dial),
    },
    SectionDescriptor {
        kind: AssessmentKind::HillOverlay,
        title: "Hill Overlay",
        sheet_name: "Hill Overlay",
        layout: RowLayout::PerSession,
        columns: &["Principle", "Micro-Action", "Commitment"],
        project: |s| s.hill_overlay().map(hill_overlay),
    },
    SectionDescriptor {
        kind: AssessmentKind::DailyPractice,
        title: "Daily 10",
        sheet_name: "Daily 10",
        layout: RowLayout::PerSession,
        columns: &[
            DAILY_PROMPTS[0],
            DAILY_PROMPTS[1],
            DAILY_PROMPTS[2],
            DAILY_PROMPTS[3],
            DAILY_PROMPTS[4],
            "Completed At",
            "Duration",
        ],
        project: |s| s.daily_practice().map(daily_practice),
    },
];

/// Descriptor for a kind.
pub fn descriptor(kind: AssessmentKind) -> &'static SectionDescriptor {
    &SECTIONS[kind.position()]
}

fn fields(fields: Vec<Field>) -> SectionBody {
    SectionBody {
        fields,
        records: Vec::new(),
    }
}

fn intake(intake: &Intake) -> SectionBody {
    fields(vec![
        Field::new("Name", Value::text(&intake.name)),
        Field::new("Birth Date", Value::optional_text(intake.birth_date.as_deref())),
        Field::new("Birth Time", Value::optional_text(intake.birth_time.as_deref())),
        Field::new("Birth Place", Value::optional_text(intake.birth_place.as_deref())),
        Field::new("Consent", Value::Flag(intake.consent)),
        Field::new(
            "Conditions of Life",
            Value::optional_text(intake.conditions_of_life.as_deref()),
        ),
        Field::new("Loop to Break", Value::optional_text(intake.loop_to_break.as_deref())),
    ])
}

fn belief_map(map: &BeliefMap) -> SectionBody {
    let records = map
        .items
        .iter()
        .map(|item| Record {
            fields: vec![
                Field::new("Item ID", Value::text(&item.id)).tabular_only(),
                Field::new("Type", Value::Tag(item.item_type.as_str())),
                Field::new("Content", Value::text(&item.content)),
                Field::new("X", Value::optional_number(item.x)).tabular_only(),
                Field::new("Y", Value::optional_number(item.y)).tabular_only(),
                Field::new(
                    "Connected To",
                    Value::Text(join_connections(item.connected_to.as_deref())),
                ),
            ],
        })
        .collect();

    SectionBody {
        fields: Vec::new(),
        records,
    }
}

fn triangle_shift(shift: &TriangleShift) -> SectionBody {
    fields(vec![
        Field::new("Current Role", Value::Tag(shift.current_role.as_str())),
        Field::new("Situation", Value::text(&shift.situation)),
        Field::new("Transformed Role", Value::Tag(shift.transformed_role.as_str())),
        Field::new(
            "New Perspective",
            Value::optional_text(shift.new_perspective.as_deref()),
        ),
    ])
}

fn six_fears(six: &SixFears) -> SectionBody {
    let selected = six
        .fears
        .iter()
        .map(|fear| {
            let entry = ListEntry::new(Value::Tag(fear.as_str()));
            match six.note_for(*fear) {
                Some(note) if !note.trim().is_empty() => entry.with_note(note),
                _ => entry,
            }
        })
        .collect();

    // Every note, selected or not, in one tabular cell.
    let all_notes: Vec<String> = six
        .notes
        .iter()
        .flatten()
        .filter(|(_, note)| !note.trim().is_empty())
        .map(|(fear, note)| format!("{}: {}", fear.as_str(), note))
        .collect();
    let notes = if all_notes.is_empty() {
        Value::Missing
    } else {
        Value::Text(all_notes.join("; "))
    };

    let orphans = six
        .orphan_notes()
        .filter(|(_, note)| !note.trim().is_empty())
        .map(|(fear, note)| ListEntry::new(Value::Tag(fear.as_str())).with_note(note))
        .collect();

    fields(vec![
        Field::new("Fears", Value::List(selected)),
        Field::new("Notes", notes).tabular_only(),
        Field::new("Additional Notes", Value::List(orphans))
            .narrative_only()
            .elide_when_missing(),
    ])
}

fn feelings_dial(dial: &FeelingsDial) -> SectionBody {
    let mut out: Vec<Field> = Emotion::ALL
        .into_iter()
        .map(|emotion| {
            Field::new(
                emotion.label(),
                Value::Integer(i64::from(dial.emotions.get(emotion).value())),
            )
        })
        .collect();
    out.push(
        Field::new(
            "Sit Completed At",
            Value::optional_timestamp(dial.sit_completed_at.as_ref()),
        )
        .elide_when_missing(),
    );
    out.push(Field::new(
        "Reflections",
        Value::optional_text(dial.reflections.as_deref()),
    ));
    fields(out)
}

fn hill_overlay(hill: &HillOverlay) -> SectionBody {
    fields(vec![
        Field::new("Principle", Value::text(&hill.principle)),
        Field::new("Micro-Action", Value::text(&hill.micro_action)),
        Field::new("Commitment", Value::optional_text(hill.commitment.as_deref())),
    ])
}

fn daily_practice(daily: &DailyPractice) -> SectionBody {
    let mut out: Vec<Field> = DAILY_PROMPTS
        .into_iter()
        .zip(daily.answers())
        .map(|(question, answer)| Field::new(question, Value::optional_text(answer)))
        .collect();
    out.push(
        Field::new(
            "Completed At",
            Value::optional_timestamp(daily.completed_at.as_ref()),
        )
        .elide_when_missing(),
    );
    out.push(
        Field::new(
            "Duration",
            daily.duration.map_or(Value::Missing, Value::Duration),
        )
        .elide_when_missing(),
    );
    fields(out)
}
