//! Triangle shift: moving from a drama role to an empowered role.

use serde::{Deserialize, Serialize};

use super::rules::{optional_text, require_text};
use crate::domain::foundation::ValidationError;

/// Role currently occupied in the drama triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentRole {
    Victim,
    Hero,
    Persecutor,
}

impl CurrentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrentRole::Victim => "victim",
            CurrentRole::Hero => "hero",
            CurrentRole::Persecutor => "persecutor",
        }
    }
}

/// Empowered counterpart role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformedRole {
    Creator,
    Coach,
    Challenger,
}

impl TransformedRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformedRole::Creator => "creator",
            TransformedRole::Coach => "coach",
            TransformedRole::Challenger => "challenger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleShift {
    pub current_role: CurrentRole,
    pub situation: String,
    pub transformed_role: TransformedRole,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_perspective: Option<String>,
}

impl TriangleShift {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("situation", &self.situation)?;
        optional_text("newPerspective", self.new_perspective.as_deref())
    }
}
