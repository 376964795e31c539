//! Session aggregate entity.
//!
//! A session is the per-user record of the assessment journey. It holds
//! zero or one value of each sub-assessment kind; every kind is optional and
//! a session with none of them is valid.
//!
//! # Ownership
//!
//! Sessions belong exclusively to the user who created them. Export paths
//! only ever read them.

use serde::{Deserialize, Serialize};

use super::AiInteraction;
use crate::domain::assessment::{
    AssessmentKind, BeliefMap, DailyPractice, FeelingsDial, HillOverlay, Intake, SixFears,
    SubAssessment, TriangleShift,
};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp, UserId};

/// Session aggregate - composite record of all sub-assessment answers.
///
/// # Invariants
///
/// - `created_at` never changes after creation
/// - `updated_at` never moves backwards and is never before `created_at`
/// - each sub-assessment is replaced wholesale, never merged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    id: SessionId,

    user_id: UserId,

    created_at: Timestamp,

    updated_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    intake: Option<Intake>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    belief_map: Option<BeliefMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    triangle_shift: Option<TriangleShift>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    six_fears: Option<SixFears>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    feelings_dial: Option<FeelingsDial>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    hill_overlay: Option<HillOverlay>,

    #[serde(rename = "daily10", default, skip_serializing_if = "Option::is_none")]
    daily_practice: Option<DailyPractice>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    ai_interactions: Vec<AiInteraction>,
}

impl Session {
    /// Create a new, empty session.
    pub fn new(id: SessionId, user_id: UserId) -> Self {
        Self::started_at(id, user_id, Timestamp::now())
    }

    /// Create a new, empty session with an explicit creation time.
    pub fn started_at(id: SessionId, user_id: UserId, at: Timestamp) -> Self {
        Self {
            id,
            user_id,
            created_at: at,
            updated_at: at,
            intake: None,
            belief_map: None,
            triangle_shift: None,
            six_fears: None,
            feelings_dial: None,
            hill_overlay: None,
            daily_practice: None,
            ai_interactions: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn intake(&self) -> Option<&Intake> {
        self.intake.as_ref()
    }

    pub fn belief_map(&self) -> Option<&BeliefMap> {
        self.belief_map.as_ref()
    }

    pub fn triangle_shift(&self) -> Option<&TriangleShift> {
        self.triangle_shift.as_ref()
    }

    pub fn six_fears(&self) -> Option<&SixFears> {
        self.six_fears.as_ref()
    }

    pub fn feelings_dial(&self) -> Option<&FeelingsDial> {
        self.feelings_dial.as_ref()
    }

    pub fn hill_overlay(&self) -> Option<&HillOverlay> {
        self.hill_overlay.as_ref()
    }

    pub fn daily_practice(&self) -> Option<&DailyPractice> {
        self.daily_practice.as_ref()
    }

    /// Recorded AI insight exchanges, oldest first.
    pub fn ai_interactions(&self) -> &[AiInteraction] {
        &self.ai_interactions
    }

    /// Whether a sub-assessment of this kind is present.
    pub fn has(&self, kind: AssessmentKind) -> bool {
        match kind {
            AssessmentKind::Intake => self.intake.is_some(),
            AssessmentKind::BeliefMap => self.belief_map.is_some(),
            AssessmentKind::TriangleShift => self.triangle_shift.is_some(),
            AssessmentKind::SixFears => self.six_fears.is_some(),
            AssessmentKind::FeelingsDial => self.feelings_dial.is_some(),
            AssessmentKind::HillOverlay => self.hill_overlay.is_some(),
            AssessmentKind::DailyPractice => self.daily_practice.is_some(),
        }
    }

    /// Kinds present in this session, in the fixed order.
    pub fn present_kinds(&self) -> Vec<AssessmentKind> {
        AssessmentKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given user owns this session.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Validates that the user can access this session.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if user is not the owner
    pub fn authorize(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User is not authorized to access this session",
            ))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Record (or replace) a sub-assessment.
    ///
    /// Returns the previous value of the same kind, if any.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the value violates its schema; the session
    ///   is left untouched
    pub fn record(&mut self, assessment: SubAssessment) -> Result<Option<SubAssessment>, DomainError> {
        self.record_at(assessment, Timestamp::now())
    }

    /// Record a sub-assessment as of `at`.
    pub fn record_at(
        &mut self,
        assessment: SubAssessment,
        at: Timestamp,
    ) -> Result<Option<SubAssessment>, DomainError> {
        assessment.validate()?;

        let previous = match assessment {
            SubAssessment::Intake(a) => self.intake.replace(a).map(SubAssessment::Intake),
            SubAssessment::BeliefMap(a) => self.belief_map.replace(a).map(SubAssessment::BeliefMap),
            SubAssessment::TriangleShift(a) => self
                .triangle_shift
                .replace(a)
                .map(SubAssessment::TriangleShift),
            SubAssessment::SixFears(a) => self.six_fears.replace(a).map(SubAssessment::SixFears),
            SubAssessment::FeelingsDial(a) => self
                .feelings_dial
                .replace(a)
                .map(SubAssessment::FeelingsDial),
            SubAssessment::HillOverlay(a) => self
                .hill_overlay
                .replace(a)
                .map(SubAssessment::HillOverlay),
            SubAssessment::DailyPractice(a) => self
                .daily_practice
                .replace(a)
                .map(SubAssessment::DailyPractice),
        };
        self.touch(at);
        Ok(previous)
    }

    /// Remove a sub-assessment. Returns the removed value, if any.
    pub fn clear(&mut self, kind: AssessmentKind) -> Option<SubAssessment> {
        self.clear_at(kind, Timestamp::now())
    }

    /// Remove a sub-assessment as of `at`.
    pub fn clear_at(&mut self, kind: AssessmentKind, at: Timestamp) -> Option<SubAssessment> {
        let removed = match kind {
            AssessmentKind::Intake => self.intake.take().map(SubAssessment::Intake),
            AssessmentKind::BeliefMap => self.belief_map.take().map(SubAssessment::BeliefMap),
            AssessmentKind::TriangleShift => {
                self.triangle_shift.take().map(SubAssessment::TriangleShift)
            }
            AssessmentKind::SixFears => self.six_fears.take().map(SubAssessment::SixFears),
            AssessmentKind::FeelingsDial => {
                self.feelings_dial.take().map(SubAssessment::FeelingsDial)
            }
            AssessmentKind::HillOverlay => self.hill_overlay.take().map(SubAssessment::HillOverlay),
            AssessmentKind::DailyPractice => {
                self.daily_practice.take().map(SubAssessment::DailyPractice)
            }
        };
        if removed.is_some() {
            self.touch(at);
        }
        removed
    }

    /// Append an AI insight exchange.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if prompt or response is blank
    pub fn record_ai_interaction(
        &mut self,
        prompt: impl Into<String>,
        response: impl Into<String>,
        at: Timestamp,
    ) -> Result<(), DomainError> {
        let interaction = AiInteraction::new(prompt, response, at)?;
        self.ai_interactions.push(interaction);
        self.touch(at);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves `updated_at` forward; a clock that steps backwards is ignored.
    fn touch(&mut self, at: Timestamp) {
        if at.is_after(&self.updated_at) {
            self.updated_at = at;
        }
    }
}
