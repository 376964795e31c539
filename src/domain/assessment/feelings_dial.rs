//! Feelings dial ratings.

use serde::{Deserialize, Serialize};

use super::rules::optional_text;
use crate::domain::foundation::{Intensity, Timestamp, ValidationError};

/// The fixed emotion set, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Anger,
    Sadness,
    Guilt,
    Shame,
    Fear,
    Joy,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Anger,
        Emotion::Sadness,
        Emotion::Guilt,
        Emotion::Shame,
        Emotion::Fear,
        Emotion::Joy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Anger => "Anger",
            Emotion::Sadness => "Sadness",
            Emotion::Guilt => "Guilt",
            Emotion::Shame => "Shame",
            Emotion::Fear => "Fear",
            Emotion::Joy => "Joy",
        }
    }
}

/// One intensity per emotion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emotions {
    pub anger: Intensity,
    pub sadness: Intensity,
    pub guilt: Intensity,
    pub shame: Intensity,
    pub fear: Intensity,
    pub joy: Intensity,
}

impl Emotions {
    /// Builds the set from raw ratings in [`Emotion::ALL`] order.
    pub fn from_ratings(ratings: [u8; 6]) -> Result<Self, ValidationError> {
        let [anger, sadness, guilt, shame, fear, joy] = ratings;
        Ok(Self {
            anger: Intensity::try_new(anger)?,
            sadness: Intensity::try_new(sadness)?,
            guilt: Intensity::try_new(guilt)?,
            shame: Intensity::try_new(shame)?,
            fear: Intensity::try_new(fear)?,
            joy: Intensity::try_new(joy)?,
        })
    }

    pub fn get(&self, emotion: Emotion) -> Intensity {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Sadness => self.sadness,
            Emotion::Guilt => self.guilt,
            Emotion::Shame => self.shame,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeelingsDial {
    pub emotions: Emotions,

    /// When the mindfulness sit was finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sit_completed_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflections: Option<String>,
}

impl FeelingsDial {
    pub fn new(emotions: Emotions) -> Self {
        Self {
            emotions,
            sit_completed_at: None,
            reflections: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        optional_text("reflections", self.reflections.as_deref())
    }
}
