//! Hill overlay: a guiding principle and a micro-action toward it.

use serde::{Deserialize, Serialize};

use super::rules::{optional_text, require_min_chars, require_text};
use crate::domain::foundation::ValidationError;

/// Minimum length of a micro-action description.
pub const MIN_MICRO_ACTION_CHARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HillOverlay {
    pub principle: String,
    pub micro_action: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<String>,
}

impl HillOverlay {
    pub fn new(principle: impl Into<String>, micro_action: impl Into<String>) -> Self {
        Self {
            principle: principle.into(),
            micro_action: micro_action.into(),
            commitment: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("principle", &self.principle)?;
        require_min_chars("microAction", &self.micro_action, MIN_MICRO_ACTION_CHARS)?;
        optional_text("commitment", self.commitment.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_micro_action_is_rejected() {
        let err = HillOverlay::new("Courage", "run").validate().unwrap_err();
        assert_eq!(err.field(), "microAction");
    }

    #[test]
    fn empty_principle_is_rejected() {
        assert!(HillOverlay::new("", "Call my sister").validate().is_err());
    }

    #[test]
    fn valid_overlay_passes() {
        assert!(HillOverlay::new("Gratitude", "Write three thanks").validate().is_ok());
    }
}
