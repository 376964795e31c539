//! Recorded AI insight exchanges.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp};

/// A prompt sent to the insight assistant and the response it gave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiInteraction {
    pub prompt: String,
    pub response: String,
    pub timestamp: Timestamp,
}

impl AiInteraction {
    /// # Errors
    ///
    /// - `ValidationFailed` if prompt or response is blank
    pub fn new(
        prompt: impl Into<String>,
        response: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<Self, DomainError> {
        let prompt = prompt.into();
        let response = response.into();
        if prompt.trim().is_empty() {
            return Err(DomainError::validation("prompt", "Prompt cannot be empty"));
        }
        if response.trim().is_empty() {
            return Err(DomainError::validation("response", "Response cannot be empty"));
        }
        Ok(Self {
            prompt,
            response,
            timestamp,
        })
    }
}
