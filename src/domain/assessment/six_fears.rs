//! Six fears selection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::rules::require_text;
use crate::domain::foundation::ValidationError;

/// The fixed set of six fears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fear {
    FearOfFailure,
    FearOfSuccess,
    FearOfRejection,
    FearOfAbandonment,
    FearOfLossOfControl,
    FearOfDeath,
}

impl Fear {
    pub const ALL: [Fear; 6] = [
        Fear::FearOfFailure,
        Fear::FearOfSuccess,
        Fear::FearOfRejection,
        Fear::FearOfAbandonment,
        Fear::FearOfLossOfControl,
        Fear::FearOfDeath,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Fear::FearOfFailure => "fear_of_failure",
            Fear::FearOfSuccess => "fear_of_success",
            Fear::FearOfRejection => "fear_of_rejection",
            Fear::FearOfAbandonment => "fear_of_abandonment",
            Fear::FearOfLossOfControl => "fear_of_loss_of_control",
            Fear::FearOfDeath => "fear_of_death",
        }
    }
}

/// Selected fears with optional notes.
///
/// `notes` is keyed by fear but is not required to match `fears`; a note
/// for an unselected fear is kept and exported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SixFears {
    pub fears: Vec<Fear>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<BTreeMap<Fear, String>>,
}

impl SixFears {
    pub fn new(fears: Vec<Fear>) -> Self {
        Self { fears, notes: None }
    }

    /// Adds or replaces a note for a fear.
    pub fn with_note(mut self, fear: Fear, note: impl Into<String>) -> Self {
        self.notes.get_or_insert_with(BTreeMap::new).insert(fear, note.into());
        self
    }

    /// Note attached to a fear, if any.
    pub fn note_for(&self, fear: Fear) -> Option<&str> {
        self.notes.as_ref()?.get(&fear).map(String::as_str)
    }

    /// Notes whose fear is not in the selection.
    pub fn orphan_notes(&self) -> impl Iterator<Item = (Fear, &str)> + '_ {
        self.notes
            .iter()
            .flatten()
            .filter(|(fear, _)| !self.fears.contains(fear))
            .map(|(fear, note)| (*fear, note.as_str()))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, fear) in self.fears.iter().enumerate() {
            if self.fears[..index].contains(fear) {
                return Err(ValidationError::invalid_format(
                    "fears",
                    format!("'{}' selected more than once", fear.as_str()),
                ));
            }
        }
        for note in self.notes.iter().flat_map(|notes| notes.values()) {
            require_text("notes", note)?;
        }
        Ok(())
    }
}
