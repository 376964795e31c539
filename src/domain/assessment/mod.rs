//! Assessment module - the seven sub-assessment schemas.
//!
//! Each schema is an independently optional part of a session. Values are
//! validated when a workflow step records them; the export path only reads.

mod belief_map;
mod daily_practice;
mod feelings_dial;
mod hill_overlay;
mod intake;
mod kind;
mod rules;
mod six_fears;
mod triangle_shift;
mod variant;

pub use belief_map::{BeliefItemType, BeliefMap, BeliefMapItem};
pub use daily_practice::{DailyPractice, DAILY_PROMPTS};
pub use feelings_dial::{Emotion, Emotions, FeelingsDial};
pub use hill_overlay::{HillOverlay, MIN_MICRO_ACTION_CHARS};
pub use intake::Intake;
pub use kind::AssessmentKind;
pub use six_fears::{Fear, SixFears};
pub use triangle_shift::{CurrentRole, TransformedRole, TriangleShift};
pub use variant::SubAssessment;
