//! SubAssessment - sum type over the seven assessment shapes.

use super::{
    AssessmentKind, BeliefMap, DailyPractice, FeelingsDial, HillOverlay, Intake, SixFears,
    TriangleShift,
};
use crate::domain::foundation::ValidationError;

/// One completed sub-assessment, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SubAssessment {
    Intake(Intake),
    BeliefMap(BeliefMap),
    TriangleShift(TriangleShift),
    SixFears(SixFears),
    FeelingsDial(FeelingsDial),
    HillOverlay(HillOverlay),
    DailyPractice(DailyPractice),
}

impl SubAssessment {
    /// Returns the kind tag.
    pub fn kind(&self) -> AssessmentKind {
        match self {
            SubAssessment::Intake(_) => AssessmentKind::Intake,
            SubAssessment::BeliefMap(_) => AssessmentKind::BeliefMap,
            SubAssessment::TriangleShift(_) => AssessmentKind::TriangleShift,
            SubAssessment::SixFears(_) => AssessmentKind::SixFears,
            SubAssessment::FeelingsDial(_) => AssessmentKind::FeelingsDial,
            SubAssessment::HillOverlay(_) => AssessmentKind::HillOverlay,
            SubAssessment::DailyPractice(_) => AssessmentKind::DailyPractice,
        }
    }

    /// Checks the value against its schema.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            SubAssessment::Intake(a) => a.validate(),
            SubAssessment::BeliefMap(a) => a.validate(),
            SubAssessment::TriangleShift(a) => a.validate(),
            SubAssessment::SixFears(a) => a.validate(),
            SubAssessment::FeelingsDial(a) => a.validate(),
            SubAssessment::HillOverlay(a) => a.validate(),
            SubAssessment::DailyPractice(a) => a.validate(),
        }
    }

    /// Parses a payload submitted by the workflow step for `kind`.
    pub fn from_value(
        kind: AssessmentKind,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            AssessmentKind::Intake => SubAssessment::Intake(serde_json::from_value(value)?),
            AssessmentKind::BeliefMap => SubAssessment::BeliefMap(serde_json::from_value(value)?),
            AssessmentKind::TriangleShift => {
                SubAssessment::TriangleShift(serde_json::from_value(value)?)
            }
            AssessmentKind::SixFears => SubAssessment::SixFears(serde_json::from_value(value)?),
            AssessmentKind::FeelingsDial => {
                SubAssessment::FeelingsDial(serde_json::from_value(value)?)
            }
            AssessmentKind::HillOverlay => {
                SubAssessment::HillOverlay(serde_json::from_value(value)?)
            }
            AssessmentKind::DailyPractice => {
                SubAssessment::DailyPractice(serde_json::from_value(value)?)
            }
        })
    }
}

macro_rules! impl_from_assessment {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for SubAssessment {
                fn from(value: $variant) -> Self {
                    SubAssessment::$variant(value)
                }
            }
        )*
    };
}

impl_from_assessment!(
    Intake,
    BeliefMap,
    TriangleShift,
    SixFears,
    FeelingsDial,
    HillOverlay,
    DailyPractice,
);
