//! Connected, destination and selected calendar types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A calendar app integration as the API describes it.
///
/// The integration catalog carries many app-specific keys; unknown ones
/// are collected in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub publisher: String,
    pub slug: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A single calendar within a connected integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub external_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    pub read_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub is_selected: bool,
    pub credential_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegation_credential_id: Option<String>,
}

/// A connected calendar account and its calendars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedCalendar {
    pub integration: Integration,
    pub credential_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegation_credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<Calendar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendars: Option<Vec<Calendar>>,
}

/// The calendar new events are written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDestination {
    pub id: u64,
    pub integration: String,
    pub external_id: String,
    #[serde(default)]
    pub primary_email: String,
    pub user_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type_id: Option<u64>,
    pub credential_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegation_credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_title: Option<String>,
}

/// Everything the calendars endpoint returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedCalendarsData {
    #[serde(default)]
    pub connected_calendars: Vec<ConnectedCalendar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_calendar: Option<CalendarDestination>,
}

/// Selector identifying one calendar within one credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCalendarInput {
    pub integration: String,
    pub external_id: String,
    pub credential_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegation_credential_id: Option<String>,
}

/// A calendar marked for conflict checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCalendar {
    pub user_id: u64,
    pub integration: String,
    pub external_id: String,
    pub credential_id: u64,
}
