//! Belief mapper canvas.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rules::require_text;
use crate::domain::foundation::ValidationError;

/// What a node on the belief map represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeliefItemType {
    Event,
    Belief,
    Loop,
    Disconnection,
}

impl BeliefItemType {
    /// Declared (wire) spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            BeliefItemType::Event => "event",
            BeliefItemType::Belief => "belief",
            BeliefItemType::Loop => "loop",
            BeliefItemType::Disconnection => "disconnection",
        }
    }
}

impl fmt::Display for BeliefItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single node on the canvas.
///
/// `connected_to` holds ids of other items. The ids are opaque and are not
/// checked against the map, so a reference to a removed item is legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeliefMapItem {
    pub id: String,

    #[serde(rename = "type")]
    pub item_type: BeliefItemType,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_to: Option<Vec<String>>,
}

impl BeliefMapItem {
    pub fn new(id: impl Into<String>, item_type: BeliefItemType, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item_type,
            content: content.into(),
            x: None,
            y: None,
            connected_to: None,
        }
    }

    /// Places the item on the canvas.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Links the item to other item ids.
    pub fn connected(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.connected_to = Some(ids.into_iter().map(Into::into).collect());
        self
    }
}

/// Ordered list of belief map items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeliefMap {
    pub items: Vec<BeliefMapItem>,
}

impl BeliefMap {
    pub fn new(items: Vec<BeliefMapItem>) -> Self {
        Self { items }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for item in &self.items {
            require_text("items.id", &item.id)?;
            for coordinate in [item.x, item.y].into_iter().flatten() {
                if !coordinate.is_finite() {
                    return Err(ValidationError::invalid_format(
                        "items.position",
                        "coordinates must be finite",
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_connections_are_accepted() {
        let map = BeliefMap::new(vec![
            BeliefMapItem::new("a", BeliefItemType::Event, "Lost a job").connected(["ghost"]),
        ]);
        assert!(map.validate().is_ok());
    }

    #[test]
    fn empty_item_id_is_rejected() {
        let map = BeliefMap::new(vec![BeliefMapItem::new("", BeliefItemType::Belief, "x")]);
        assert!(map.validate().is_err());
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let map = BeliefMap::new(vec![
            BeliefMapItem::new("a", BeliefItemType::Loop, "x").at(f64::NAN, 1.0),
        ]);
        assert!(map.validate().is_err());
    }

    #[test]
    fn item_type_uses_type_key() {
        let item = BeliefMapItem::new("a", BeliefItemType::Disconnection, "alone");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "disconnection");
        assert!(json.get("connectedTo").is_none());
    }
}
