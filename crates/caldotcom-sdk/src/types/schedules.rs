//! Availability schedule types.

use serde::{Deserialize, Serialize};

use super::common::{TimeZone, Weekday};

/// A weekly availability window (`startTime`/`endTime` are `HH:MM`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAvailability {
    pub days: Vec<Weekday>,
    pub start_time: String,
    pub end_time: String,
}

/// A date-specific override of the weekly pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOverride {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// An availability schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: u64,
    pub owner_id: u64,
    pub name: String,
    pub time_zone: TimeZone,
    #[serde(default)]
    pub availability: Vec<ScheduleAvailability>,
    pub is_default: bool,
    #[serde(default)]
    pub overrides: Vec<ScheduleOverride>,
}

/// Input for creating a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleInput {
    pub name: String,
    pub time_zone: TimeZone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<ScheduleAvailability>>,
    pub is_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Vec<ScheduleOverride>>,
}

/// Input for updating a schedule; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<ScheduleAvailability>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Vec<ScheduleOverride>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_schedule() {
        let json = r#"{
            "id": 5,
            "ownerId": 7,
            "name": "Working hours",
            "timeZone": "Europe/Paris",
            "availability": [
                { "days": ["Monday", "Tuesday"], "startTime": "09:00", "endTime": "17:00" }
            ],
            "isDefault": true,
            "overrides": [
                { "date": "2024-12-24", "startTime": "09:00", "endTime": "12:00" }
            ]
        }"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert!(schedule.is_default);
        assert_eq!(schedule.availability[0].days, vec![Weekday::Monday, Weekday::Tuesday]);
        assert_eq!(schedule.overrides[0].date, "2024-12-24");
    }
}
