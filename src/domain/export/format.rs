//! Human and tabular field formatting shared by the emitters.

use chrono::{FixedOffset, Offset, Utc};

use super::projection::Value;
use crate::domain::foundation::Timestamp;

/// Placeholder for a missing value in tabular and narrative output.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rendering of an empty connection list.
pub const NO_CONNECTIONS: &str = "None";

/// Default date/time pattern (US-English style, like `toLocaleString`).
pub const DEFAULT_DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// How enum tags and durations are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Declared casing and raw numbers (spreadsheets).
    Declared,
    /// Title Case tags and spelled-out durations (documents).
    Human,
}

/// Locale settings applied to timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub offset: FixedOffset,
    pub datetime_format: String,
}

impl DisplaySettings {
    pub fn new(offset: FixedOffset, datetime_format: impl Into<String>) -> Self {
        Self {
            offset,
            datetime_format: datetime_format.into(),
        }
    }

    pub fn timestamp(&self, ts: &Timestamp) -> String {
        ts.display_in(self.offset, &self.datetime_format)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

/// `fear_of_loss_of_control` -> `Fear Of Loss Of Control`.
pub fn title_case(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `125` -> `2 minutes 5 seconds`.
pub fn duration_text(seconds: u64) -> String {
    format!("{} minutes {} seconds", seconds / 60, seconds % 60)
}

/// Joins connection ids with `, `, or `None` when there are none.
pub fn join_connections(ids: Option<&[String]>) -> String {
    match ids {
        Some(ids) if !ids.is_empty() => ids.join(", "),
        _ => NO_CONNECTIONS.to_string(),
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Shortest faithful decimal form; whole numbers drop the fraction.
pub fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Renders a scalar value as a single string.
///
/// Lists are joined with `, ` (notes are not included); `Missing` becomes
/// [`NOT_AVAILABLE`].
pub fn scalar_text(value: &Value, style: TextStyle, settings: &DisplaySettings) -> String {
    match value {
        Value::Text(text) => text.clone(),
        Value::Tag(tag) => tag_text(tag, style),
        Value::Integer(n) => n.to_string(),
        Value::Number(n) => number_text(*n),
        Value::Flag(flag) => yes_no(*flag).to_string(),
        Value::Timestamp(ts) => settings.timestamp(ts),
        Value::Duration(seconds) => match style {
            TextStyle::Declared => seconds.to_string(),
            TextStyle::Human => duration_text(*seconds),
        },
        Value::List(entries) if entries.is_empty() => NO_CONNECTIONS.to_string(),
        Value::List(entries) => entries
            .iter()
            .map(|entry| scalar_text(&entry.value, style, settings))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Missing => NOT_AVAILABLE.to_string(),
    }
}

/// Tag spelling for the given style.
pub fn tag_text(tag: &str, style: TextStyle) -> String {
    match style {
        TextStyle::Declared => tag.to_string(),
        TextStyle::Human => title_case(tag),
    }
}
