//! Slot availability and reservation types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::TimeZone;

/// A start/end pair in range-formatted availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRangeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Available slots keyed by date (`YYYY-MM-DD`).
///
/// The shape depends on the requested `format`: plain start times by
/// default, start/end ranges when `format=range` was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AvailableSlots {
    /// `format=range` responses.
    Ranges(HashMap<String, Vec<TimeRangeSlot>>),
    /// Default responses: slot start times.
    Times(HashMap<String, Vec<String>>),
}

/// Options for querying available slots.
#[derive(Debug, Clone)]
pub struct GetAvailableSlotsOptions {
    /// Start of the search window (inclusive).
    pub start: DateTime<Utc>,
    /// End of the search window (inclusive).
    pub end: DateTime<Utc>,
    pub event_type_id: Option<u64>,
    pub event_type_slug: Option<String>,
    pub username: Option<String>,
    pub organization_slug: Option<String>,
    pub team_slug: Option<String>,
    /// Multiple usernames are comma-joined on the wire.
    pub usernames: Vec<String>,
    pub time_zone: Option<TimeZone>,
    pub duration: Option<u32>,
    /// Request start/end ranges instead of bare start times.
    pub range_format: bool,
    pub booking_uid_to_reschedule: Option<String>,
}

impl GetAvailableSlotsOptions {
    /// Creates options for the given window; identify the event type with
    /// the builder-style fields before sending.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            event_type_id: None,
            event_type_slug: None,
            username: None,
            organization_slug: None,
            team_slug: None,
            usernames: Vec::new(),
            time_zone: None,
            duration: None,
            range_format: false,
            booking_uid_to_reschedule: None,
        }
    }

    /// Builder method to target an event type id.
    pub fn with_event_type_id(mut self, event_type_id: u64) -> Self {
        self.event_type_id = Some(event_type_id);
        self
    }
}

/// Input for reserving a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveSlotInput {
    pub event_type_id: u64,
    pub slot_start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_duration: Option<u32>,
}

/// A held slot reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveSlotOutput {
    pub event_type_id: u64,
    pub slot_start: DateTime<Utc>,
    pub slot_end: DateTime<Utc>,
    pub slot_duration: u32,
    pub reservation_uid: String,
    pub reservation_duration: u32,
    pub reservation_until: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_slots() {
        let json = r#"{ "2024-08-13": ["2024-08-13T09:00:00Z", "2024-08-13T09:30:00Z"] }"#;
        let slots: AvailableSlots = serde_json::from_str(json).unwrap();
        match slots {
            AvailableSlots::Times(map) => assert_eq!(map["2024-08-13"].len(), 2),
            AvailableSlots::Ranges(_) => panic!("expected bare start times"),
        }
    }

    #[test]
    fn parse_range_slots() {
        let json = r#"{
            "2024-08-13": [
                { "start": "2024-08-13T09:00:00Z", "end": "2024-08-13T09:30:00Z" }
            ]
        }"#;
        let slots: AvailableSlots = serde_json::from_str(json).unwrap();
        match slots {
            AvailableSlots::Ranges(map) => {
                assert_eq!(map["2024-08-13"][0].start.to_rfc3339(), "2024-08-13T09:00:00+00:00");
            }
            AvailableSlots::Times(_) => panic!("expected ranges"),
        }
    }
}
