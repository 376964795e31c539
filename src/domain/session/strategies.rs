//! proptest strategies producing sessions that pass every schema rule.

use chrono::{TimeZone, Utc};
use proptest::collection::{btree_map, vec};
use proptest::option;
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use uuid::Uuid;

use super::Session;
use crate::domain::assessment::{
    BeliefItemType, BeliefMap, BeliefMapItem, CurrentRole, DailyPractice, Emotions, Fear,
    FeelingsDial, HillOverlay, Intake, SixFears, SubAssessment, TransformedRole, TriangleShift,
};
use crate::domain::foundation::{SessionId, Timestamp, UserId};

const YEAR_2100_MILLIS: i64 = 4_102_444_800_000;

/// Any millisecond between 1970 and 2100.
pub(crate) fn timestamp() -> impl Strategy<Value = Timestamp> {
    (0..YEAR_2100_MILLIS)
        .prop_map(|ms| Timestamp::from_datetime(Utc.timestamp_millis_opt(ms).unwrap()))
}

/// Non-blank free text, including accents, dashes and line breaks.
fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9\u{e9}][ A-Za-z0-9,.'!?\"\u{e9}\u{2013}\n]{0,40}"
}

fn item_id() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,8}"
}

/// Canvas coordinates with a fractional part.
fn coordinate() -> impl Strategy<Value = f64> {
    (-1_000_000i32..1_000_000).prop_map(|n| f64::from(n) / 100.0)
}

fn intake() -> impl Strategy<Value = Intake> {
    (
        text(),
        option::of(text()),
        option::of(text()),
        option::of(text()),
        option::of(text()),
        option::of(text()),
    )
        .prop_map(
            |(name, birth_date, birth_time, birth_place, conditions_of_life, loop_to_break)| Intake {
                name,
                birth_date,
                birth_time,
                birth_place,
                consent: true,
                conditions_of_life,
                loop_to_break,
            },
        )
}

fn belief_map() -> impl Strategy<Value = BeliefMap> {
    let item = (
        item_id(),
        select(vec![
            BeliefItemType::Event,
            BeliefItemType::Belief,
            BeliefItemType::Loop,
            BeliefItemType::Disconnection,
        ]),
        "[ -~]{0,30}",
        option::of(coordinate()),
        option::of(coordinate()),
        option::of(vec(item_id(), 0..4)),
    )
        .prop_map(|(id, item_type, content, x, y, connected_to)| BeliefMapItem {
            id,
            item_type,
            content,
            x,
            y,
            connected_to,
        });
    vec(item, 0..5).prop_map(BeliefMap::new)
}

fn triangle_shift() -> impl Strategy<Value = TriangleShift> {
    (
        select(vec![CurrentRole::Victim, CurrentRole::Hero, CurrentRole::Persecutor]),
        text(),
        select(vec![
            TransformedRole::Creator,
            TransformedRole::Coach,
            TransformedRole::Challenger,
        ]),
        option::of(text()),
    )
        .prop_map(
            |(current_role, situation, transformed_role, new_perspective)| TriangleShift {
                current_role,
                situation,
                transformed_role,
                new_perspective,
            },
        )
}

/// Notes may sit on fears that are not selected.
fn six_fears() -> impl Strategy<Value = SixFears> {
    (
        subsequence(Fear::ALL.to_vec(), 0..=Fear::ALL.len()).prop_shuffle(),
        option::of(btree_map(select(Fear::ALL.to_vec()), text(), 0..4)),
    )
        .prop_map(|(fears, notes)| SixFears { fears, notes })
}

fn feelings_dial() -> impl Strategy<Value = FeelingsDial> {
    (
        prop::array::uniform6(0u8..=10),
        option::of(timestamp()),
        option::of(text()),
    )
        .prop_map(|(ratings, sit_completed_at, reflections)| FeelingsDial {
            emotions: Emotions::from_ratings(ratings).unwrap(),
            sit_completed_at,
            reflections,
        })
}

fn hill_overlay() -> impl Strategy<Value = HillOverlay> {
    (text(), "[a-z]{5}[a-z ]{0,20}", option::of(text())).prop_map(
        |(principle, micro_action, commitment)| HillOverlay {
            principle,
            micro_action,
            commitment,
        },
    )
}

fn daily_practice() -> impl Strategy<Value = DailyPractice> {
    (
        option::of(text()),
        option::of(text()),
        option::of(text()),
        option::of(text()),
        option::of(text()),
        option::of(timestamp()),
        option::of(0u64..100_000),
    )
        .prop_map(
            |(prompt1, prompt2, prompt3, prompt4, prompt5, completed_at, duration)| DailyPractice {
                prompt1,
                prompt2,
                prompt3,
                prompt4,
                prompt5,
                completed_at,
                duration,
            },
        )
}

/// Any subset of the seven kinds.
fn assessments() -> impl Strategy<Value = Vec<SubAssessment>> {
    (
        option::of(intake()),
        option::of(belief_map()),
        option::of(triangle_shift()),
        option::of(six_fears()),
        option::of(feelings_dial()),
        option::of(hill_overlay()),
        option::of(daily_practice()),
    )
        .prop_map(|(intake, map, shift, fears, dial, hill, daily)| {
            [
                intake.map(SubAssessment::from),
                map.map(SubAssessment::from),
                shift.map(SubAssessment::from),
                fears.map(SubAssessment::from),
                dial.map(SubAssessment::from),
                hill.map(SubAssessment::from),
                daily.map(SubAssessment::from),
            ]
            .into_iter()
            .flatten()
            .collect()
        })
}

/// A session with any subset of kinds and up to three AI interactions.
pub(crate) fn session() -> impl Strategy<Value = Session> {
    (
        any::<u128>(),
        "[a-z][a-z0-9-]{0,11}",
        timestamp(),
        timestamp(),
        assessments(),
        vec((text(), text(), timestamp()), 0..3),
    )
        .prop_map(|(id, owner, created, recorded, assessments, interactions)| {
            let mut session = Session::started_at(
                SessionId::from_uuid(Uuid::from_u128(id)),
                UserId::new(owner).unwrap(),
                created,
            );
            for assessment in assessments {
                session.record_at(assessment, recorded).unwrap();
            }
            for (prompt, response, at) in interactions {
                session.record_ai_interaction(prompt, response, at).unwrap();
            }
            session
        })
}
