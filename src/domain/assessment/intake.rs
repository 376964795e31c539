//! Intake wizard answers.

use serde::{Deserialize, Serialize};

use super::rules::{optional_text, require_text};
use crate::domain::foundation::ValidationError;

/// Personal details and starting context collected by the intake wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intake {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,

    pub consent: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions_of_life: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_to_break: Option<String>,
}

impl Intake {
    /// Creates an intake with just the required fields.
    pub fn new(name: impl Into<String>, consent: bool) -> Self {
        Self {
            name: name.into(),
            birth_date: None,
            birth_time: None,
            birth_place: None,
            consent,
            conditions_of_life: None,
            loop_to_break: None,
        }
    }

    /// Checks the submitted answers.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        if !self.consent {
            return Err(ValidationError::invalid_format("consent", "consent is required"));
        }
        optional_text("birthDate", self.birth_date.as_deref())?;
        optional_text("birthTime", self.birth_time.as_deref())?;
        optional_text("birthPlace", self.birth_place.as_deref())?;
        optional_text("conditionsOfLife", self.conditions_of_life.as_deref())?;
        optional_text("loopToBreak", self.loop_to_break.as_deref())?;
        Ok(())
    }
}
