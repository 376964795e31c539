//! AssessmentKind - tag identifying each sub-assessment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The seven independently-completable sub-assessments, in journey order.
///
/// The declaration order is significant: projections, sheets and document
/// subsections are always emitted in the order of [`AssessmentKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssessmentKind {
    Intake,
    BeliefMap,
    TriangleShift,
    SixFears,
    FeelingsDial,
    HillOverlay,
    #[serde(rename = "daily10")]
    DailyPractice,
}

impl AssessmentKind {
    /// All kinds in their fixed order.
    pub const ALL: [AssessmentKind; 7] = [
        AssessmentKind::Intake,
        AssessmentKind::BeliefMap,
        AssessmentKind::TriangleShift,
        AssessmentKind::SixFears,
        AssessmentKind::FeelingsDial,
        AssessmentKind::HillOverlay,
        AssessmentKind::DailyPractice,
    ];

    /// Key used for this kind in the structured-data representation.
    pub fn key(&self) -> &'static str {
        match self {
            AssessmentKind::Intake => "intake",
            AssessmentKind::BeliefMap => "beliefMap",
            AssessmentKind::TriangleShift => "triangleShift",
            AssessmentKind::SixFears => "sixFears",
            AssessmentKind::FeelingsDial => "feelingsDial",
            AssessmentKind::HillOverlay => "hillOverlay",
            AssessmentKind::DailyPractice => "daily10",
        }
    }

    /// Short display name.
    pub fn label(&self) -> &'static str {
        match self {
            AssessmentKind::Intake => "Intake",
            AssessmentKind::BeliefMap => "Belief Map",
            AssessmentKind::TriangleShift => "Triangle Shift",
            AssessmentKind::SixFears => "Six Fears",
            AssessmentKind::FeelingsDial => "Feelings Dial",
            AssessmentKind::HillOverlay => "Hill Overlay",
            AssessmentKind::DailyPractice => "Daily 10",
        }
    }

    /// Zero-based position in the fixed order.
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AssessmentKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssessmentKind::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ValidationError::invalid_format("kind", format!("unknown assessment '{}'", s))
            })
    }
}
