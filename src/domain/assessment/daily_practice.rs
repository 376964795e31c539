//! Daily 10 reflective practice.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::foundation::ValidationError;

/// Questions answered by the five daily prompts, in order.
pub const DAILY_PROMPTS: [&str; 5] = [
    "What am I grateful for today?",
    "What challenge am I facing?",
    "What strength can I draw upon?",
    "What would love do?",
    "What is one small action I can take?",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPractice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt3: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt4: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt5: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,

    /// Elapsed time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl DailyPractice {
    /// Answers in prompt order.
    pub fn answers(&self) -> [Option<&str>; 5] {
        [
            self.prompt1.as_deref(),
            self.prompt2.as_deref(),
            self.prompt3.as_deref(),
            self.prompt4.as_deref(),
            self.prompt5.as_deref(),
        ]
    }

    /// Number of prompts with an answer.
    pub fn answered_count(&self) -> usize {
        self.answers()
            .iter()
            .filter(|answer| answer.is_some_and(|a| !a.trim().is_empty()))
            .count()
    }

    /// Every field is optional; there is nothing to reject.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
