//! Parking slot model and related types

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::enums::SlotStatus;

/// Zones laid out on every floor
pub const ZONES: [char; 4] = ['A', 'B', 'C', 'D'];

/// Slot numbers within a zone
pub const NUMBERS: [u8; 3] = [1, 2, 3];

static SLOT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^F(\d+)-([A-D])(\d+)$").expect("slot id pattern"));

/// Parking slot as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub slot_id: String,
    pub status: SlotStatus,
    #[serde(default)]
    pub booked_by: Option<String>,
    pub floor: i32,
    pub location: String,
}

/// Cached view of a slot's state, keyed by slot id in the cache
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    pub status: SlotStatus,
    pub booked_by: Option<String>,
    pub floor: i32,
    pub location: String,
}

impl From<Slot> for SlotView {
    fn from(slot: Slot) -> Self {
        Self {
            status: slot.status,
            booked_by: slot.booked_by,
            floor: slot.floor,
            location: slot.location,
        }
    }
}

/// Partial slot update for PUT /parking-slots/{id}; absent fields are not sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSlot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SlotStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<String>,
}

/// Compose a slot identifier, e.g. `F1-A1`
pub fn slot_id(floor: i32, zone: char, number: u8) -> String {
    format!("F{}-{}{}", floor, zone, number)
}

/// Floor encoded in a slot identifier, if it parses
pub fn floor_of(slot_id: &str) -> Option<i32> {
    SLOT_ID_RE
        .captures(slot_id)
        .and_then(|caps| caps.get(1))
        .and_then(|floor| floor.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_format() {
        assert_eq!(slot_id(1, 'A', 1), "F1-A1");
        assert_eq!(slot_id(2, 'D', 3), "F2-D3");
    }

    #[test]
    fn test_floor_of() {
        assert_eq!(floor_of("F1-A1"), Some(1));
        assert_eq!(floor_of("F2-C3"), Some(2));
        assert_eq!(floor_of("F12-B2"), Some(12));
    }

    #[test]
    fn test_floor_of_rejects_malformed_ids() {
        assert_eq!(floor_of("A1"), None);
        assert_eq!(floor_of("F-A1"), None);
        assert_eq!(floor_of("F1-E1"), None);
        assert_eq!(floor_of(""), None);
    }

    #[test]
    fn test_slot_wire_format() {
        let slot: Slot = serde_json::from_str(
            r#"{"slot_id":"F1-A1","status":"booked","booked_by":"Asha","floor":1,"location":"CityMall"}"#,
        )
        .unwrap();
        assert_eq!(slot.slot_id, "F1-A1");
        assert_eq!(slot.status, SlotStatus::Booked);
        assert_eq!(slot.booked_by.as_deref(), Some("Asha"));
    }

    #[test]
    fn test_update_slot_serializes_only_set_fields() {
        let update = UpdateSlot {
            status: Some(SlotStatus::Available),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"status":"available"}"#
        );
    }
}
