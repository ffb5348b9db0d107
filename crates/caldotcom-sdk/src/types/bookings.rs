//! Booking types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{LanguageCode, Metadata, SortDirection, TimeZone};

/// Status of a booking as stored by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Cancelled,
    Accepted,
    Rejected,
    Pending,
}

/// Status filter accepted by the booking list endpoint.
///
/// Deliberately distinct from [`BookingStatus`]: the list endpoint filters
/// on time-relative buckets, not stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingListStatus {
    Upcoming,
    Recurring,
    Past,
    Cancelled,
    Unconfirmed,
}

impl BookingListStatus {
    /// The value sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Recurring => "recurring",
            Self::Past => "past",
            Self::Cancelled => "cancelled",
            Self::Unconfirmed => "unconfirmed",
        }
    }
}

/// An attendee on a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub name: String,
    pub email: String,
    pub time_zone: TimeZone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absent: Option<bool>,
}

/// A host on a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub time_zone: TimeZone,
}

/// Where a booking takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Location {
    /// A physical address.
    Address {
        #[serde(skip_serializing_if = "Option::is_none")]
        address: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        public: Option<bool>,
    },
    /// A conferencing integration slug (e.g. `cal-video`).
    Integration { integration: String },
    /// An arbitrary meeting link.
    Link { link: String },
    /// A phone call.
    Phone {
        #[serde(skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
    },
}

/// Routing metadata for team bookings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued_response_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_member_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_member_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_contact_owner: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crm_app_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crm_owner_record_type: Option<String>,
}

/// Attendee details supplied when creating a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeInput {
    pub name: String,
    pub email: String,
    pub time_zone: TimeZone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
}

/// Input for creating a booking.
///
/// Exactly one of `event_type_id` or `event_type_slug` (+ owner fields)
/// identifies the event type; the API validates the combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingInput {
    /// Start time of the booking (UTC).
    pub start: DateTime<Utc>,
    pub attendee: AttendeeInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_fields_responses: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_in_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<RoutingInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verification_code: Option<String>,
    /// Request an instant booking (team event types only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instant: Option<bool>,
}

impl CreateBookingInput {
    /// Minimal booking input for an event type id.
    pub fn new(start: DateTime<Utc>, attendee: AttendeeInput, event_type_id: u64) -> Self {
        Self {
            start,
            attendee,
            event_type_id: Some(event_type_id),
            event_type_slug: None,
            username: None,
            team_slug: None,
            organization_slug: None,
            booking_fields_responses: None,
            guests: None,
            location: None,
            metadata: None,
            length_in_minutes: None,
            routing: None,
            email_verification_code: None,
            instant: None,
        }
    }
}

/// A confirmed booking as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hosts: Vec<Host>,
    pub status: BookingStatus,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration: u32,
    pub event_type_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventTypeRef>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub absent_host: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
    #[serde(default)]
    pub guests: Vec<String>,
    #[serde(default)]
    pub booking_fields_responses: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_by_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rescheduling_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rescheduled_by_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rescheduled_from_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rescheduled_to_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ics_uid: Option<String>,
    /// Present on instances of a recurring booking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_event_id: Option<String>,
}

/// Minimal event type reference embedded in bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTypeRef {
    pub id: u64,
    pub slug: String,
}

/// Create responses: a single booking, or all instances of a recurring one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingOutcome {
    /// A single booking.
    One(Box<Booking>),
    /// Every created instance of a recurring booking.
    Recurring(Vec<Booking>),
}

/// Sortable booking fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingSortField {
    Start,
    End,
    CreatedAt,
}

impl BookingSortField {
    /// The value sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::CreatedAt => "createdAt",
        }
    }
}

/// Sort specification for the booking list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingSort {
    pub field: BookingSortField,
    pub direction: SortDirection,
}

/// Filters for listing bookings.
#[derive(Debug, Clone, Default)]
pub struct GetBookingsFilters {
    /// Status buckets; multiple values are comma-joined on the wire.
    pub status: Vec<BookingListStatus>,
    pub attendee_email: Option<String>,
    pub event_type_id: Option<u64>,
    pub event_type_ids: Vec<u64>,
    pub team_id: Option<u64>,
    /// Pagination cursor: items after this point.
    pub after: Option<String>,
    /// Pagination cursor: items before this point.
    pub before: Option<String>,
    pub sort: Option<BookingSort>,
    /// Maximum number of bookings to return.
    pub take: Option<u32>,
}

/// Input for updating a booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rescheduling_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Input for cancelling a booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

/// Absence marker for one attendee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsentAttendeeInput {
    pub email: String,
    pub absent: bool,
}

/// Input for recording who missed a booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAbsentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<AbsentAttendeeInput>>,
}

/// Input for rescheduling a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleBookingInput {
    pub start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rescheduling_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_booking() {
        let json = r#"{
            "id": 123,
            "uid": "abc-def",
            "title": "Intro call",
            "description": "",
            "hosts": [{
                "id": 7,
                "name": "Host",
                "email": "host@example.com",
                "username": "host",
                "timeZone": "Europe/Paris"
            }],
            "status": "accepted",
            "start": "2024-08-13T10:00:00Z",
            "end": "2024-08-13T10:30:00Z",
            "duration": 30,
            "eventTypeId": 11,
            "eventType": { "id": 11, "slug": "intro" },
            "location": "https://meet.example.test/xyz",
            "absentHost": false,
            "createdAt": "2024-08-01T09:00:00Z",
            "updatedAt": "2024-08-01T09:00:00Z",
            "attendees": [{
                "name": "Alice",
                "email": "alice@example.com",
                "timeZone": "America/New_York",
                "language": "en"
            }],
            "guests": [],
            "bookingFieldsResponses": { "notes": "looking forward" }
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, 123);
        assert_eq!(booking.status, BookingStatus::Accepted);
        assert_eq!(booking.duration, 30);
        assert_eq!(booking.attendees[0].name, "Alice");
        assert_eq!(booking.event_type.unwrap().slug, "intro");
        assert_eq!(booking.booking_fields_responses["notes"], "looking forward");
    }

    #[test]
    fn create_input_omits_unset_fields() {
        let input = CreateBookingInput::new(
            "2024-08-13T10:00:00Z".parse().unwrap(),
            AttendeeInput {
                name: "Alice".into(),
                email: "alice@example.com".into(),
                time_zone: "UTC".into(),
                phone_number: None,
                language: None,
            },
            11,
        );
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["eventTypeId"], 11);
        assert!(json.get("guests").is_none());
        assert!(json.get("metadata").is_none());
        assert!(json["attendee"].get("phoneNumber").is_none());
    }

    #[test]
    fn location_is_type_tagged() {
        let location = Location::Integration {
            integration: "cal-video".into(),
        };
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["type"], "integration");
        assert_eq!(json["integration"], "cal-video");

        let parsed: Location =
            serde_json::from_str(r#"{"type":"link","link":"https://x.test"}"#).unwrap();
        assert_eq!(
            parsed,
            Location::Link {
                link: "https://x.test".into()
            }
        );
    }

    #[test]
    fn recurring_outcome_parses_as_list() {
        let json = r#"[]"#;
        let outcome: BookingOutcome = serde_json::from_str(json).unwrap();
        assert!(matches!(outcome, BookingOutcome::Recurring(v) if v.is_empty()));
    }
}
