//! Event type types.

use serde::{Deserialize, Serialize};

use super::bookings::Location;
use super::common::Metadata;

/// Kind of a custom booking field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingFieldKind {
    Name,
    Email,
    Phone,
    Address,
    Text,
    Number,
    Textarea,
    Select,
    Multiselect,
    Checkbox,
    Radio,
    Boolean,
}

/// A custom field shown on the booking page.
///
/// `options` is only meaningful for select/multiselect/radio kinds; the
/// API ignores it elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingField {
    #[serde(rename = "type")]
    pub kind: BookingFieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_on_prefill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// Caps on how many bookings may be accepted per period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingLimitsCount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Caps on total booked minutes per period. Values must be multiples of 15.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingLimitsDuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

/// How far into the future the event type is bookable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWindow {
    #[serde(rename = "type")]
    pub kind: BookingWindowKind,
    pub value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling: Option<bool>,
}

/// Unit for [`BookingWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingWindowKind {
    BusinessDays,
    CalendarDays,
    Range,
}

/// Booker page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookerLayout {
    Month,
    Week,
    Column,
}

/// Layouts enabled on the public booking page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookerLayouts {
    pub default_layout: BookerLayout,
    pub enabled_layouts: Vec<BookerLayout>,
}

/// When bookings need manual confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationPolicy {
    #[serde(rename = "type")]
    pub kind: ConfirmationPolicyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_threshold: Option<NoticeThreshold>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_unconfirmed_bookings_in_booker: Option<bool>,
}

/// Trigger for [`ConfirmationPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationPolicyKind {
    Always,
    Time,
}

/// Threshold for time-based confirmation policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeThreshold {
    pub unit: NoticeUnit,
    pub count: u32,
}

/// Unit for [`NoticeThreshold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeUnit {
    Minutes,
    Hours,
    Days,
}

/// Recurrence rule for repeating event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recurrence {
    pub interval: u32,
    pub occurrences: u32,
    pub frequency: RecurrenceFrequency,
}

/// Frequency for [`Recurrence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceFrequency {
    Yearly,
    Monthly,
    Weekly,
}

/// Event color per theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSettings {
    pub light_theme_hex: String,
    pub dark_theme_hex: String,
}

/// Seat configuration for multi-attendee slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatsSettings {
    pub seats_per_time_slot: u32,
    pub show_attendee_info: bool,
    pub show_availability_count: bool,
}

/// Calendar events for this event type are written here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationCalendar {
    pub integration: String,
    pub external_id: String,
}

/// Cal Video recording/transcription toggles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalVideoSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_recording_for_organizer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_recording_for_guests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_automatic_recording_for_organizer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_automatic_transcription: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_transcription_for_guests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_transcription_for_organizer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url_on_exit: Option<String>,
}

/// Input for creating an event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventTypeInput {
    pub length_in_minutes: u32,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_in_minutes_options: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_fields: Option<Vec<BookingField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_guests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_booking_notice: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_event_buffer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_event_buffer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_limits_count: Option<BookingLimitsCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_show_first_available_slot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_limits_duration: Option<BookingLimitsDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_window: Option<BookingWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booker_layouts: Option<BookerLayouts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_policy: Option<ConfirmationPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_booker_email_verification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_calendar_notes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_time_zone_toggle_on_booking_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<SeatsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_calendar: Option<DestinationCalendar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_destination_calendar_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_calendar_event_details: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_organizer_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cal_video_settings: Option<CalVideoSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_requires_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
}

impl CreateEventTypeInput {
    /// Minimal event type input.
    pub fn new(length_in_minutes: u32, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            length_in_minutes,
            title: title.into(),
            slug: slug.into(),
            length_in_minutes_options: None,
            description: None,
            booking_fields: None,
            disable_guests: None,
            slot_interval: None,
            minimum_booking_notice: None,
            before_event_buffer: None,
            after_event_buffer: None,
            schedule_id: None,
            booking_limits_count: None,
            only_show_first_available_slot: None,
            booking_limits_duration: None,
            booking_window: None,
            offset_start: None,
            booker_layouts: None,
            confirmation_policy: None,
            recurrence: None,
            requires_booker_email_verification: None,
            hide_calendar_notes: None,
            lock_time_zone_toggle_on_booking_page: None,
            color: None,
            seats: None,
            custom_name: None,
            destination_calendar: None,
            use_destination_calendar_email: None,
            hide_calendar_event_details: None,
            success_redirect_url: None,
            hide_organizer_email: None,
            cal_video_settings: None,
            hidden: None,
            booking_requires_authentication: None,
            locations: None,
        }
    }
}

/// Input for updating an event type; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventTypeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_in_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_in_minutes_options: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_fields: Option<Vec<BookingField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_guests: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_booking_notice: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_event_buffer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_event_buffer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_window: Option<BookingWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_policy: Option<ConfirmationPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<SeatsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_calendar: Option<DestinationCalendar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cal_video_settings: Option<CalVideoSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
}

/// An event type as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: u64,
    pub length_in_minutes: u32,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub booking_fields: Vec<BookingField>,
    #[serde(default)]
    pub disable_guests: bool,
    pub slot_interval: Option<u32>,
    #[serde(default)]
    pub minimum_booking_notice: u32,
    #[serde(default)]
    pub before_event_buffer: u32,
    #[serde(default)]
    pub after_event_buffer: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub lock_time_zone_toggle_on_booking_page: bool,
    #[serde(default)]
    pub is_instant_event: bool,
    pub schedule_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_limits_count: Option<BookingLimitsCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_show_first_available_slot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_limits_duration: Option<BookingLimitsDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_window: Option<Vec<BookingWindow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booker_layouts: Option<BookerLayouts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_policy: Option<ConfirmationPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<SeatsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_start: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_calendar: Option<DestinationCalendar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cal_video_settings: Option<CalVideoSettings>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub booking_requires_authentication: bool,
    #[serde(default)]
    pub owner_id: u64,
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_in_minutes_options: Option<Vec<u32>>,
}

/// Filters for listing event types.
#[derive(Debug, Clone, Default)]
pub struct GetEventTypesFilters {
    pub username: Option<String>,
    pub team_slug: Option<String>,
    pub organization_slug: Option<String>,
    pub include_hidden: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_event_type() {
        let json = r#"{
            "id": 11,
            "lengthInMinutes": 30,
            "title": "Intro",
            "slug": "intro",
            "description": "A short chat",
            "locations": [{ "type": "integration", "integration": "cal-video" }],
            "bookingFields": [
                { "type": "name", "required": true },
                { "type": "select", "label": "Topic", "options": ["a", "b"] }
            ],
            "disableGuests": false,
            "slotInterval": null,
            "minimumBookingNotice": 120,
            "beforeEventBuffer": 0,
            "afterEventBuffer": 0,
            "metadata": {},
            "lockTimeZoneToggleOnBookingPage": false,
            "isInstantEvent": false,
            "scheduleId": 5,
            "hidden": false,
            "bookingRequiresAuthentication": false,
            "ownerId": 7,
            "users": ["host"]
        }"#;

        let event_type: EventType = serde_json::from_str(json).unwrap();
        assert_eq!(event_type.slug, "intro");
        assert_eq!(event_type.slot_interval, None);
        assert_eq!(event_type.booking_fields.len(), 2);
        assert_eq!(event_type.booking_fields[1].kind, BookingFieldKind::Select);
        assert_eq!(
            event_type.booking_fields[1].options.as_deref(),
            Some(["a".to_string(), "b".to_string()].as_slice())
        );
    }

    #[test]
    fn booking_window_kind_spelling() {
        let window = BookingWindow {
            kind: BookingWindowKind::BusinessDays,
            value: 30,
            rolling: Some(true),
        };
        let json = serde_json::to_value(&window).unwrap();
        assert_eq!(json["type"], "businessDays");
    }

    #[test]
    fn update_input_default_is_empty_object() {
        let json = serde_json::to_value(UpdateEventTypeInput::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
