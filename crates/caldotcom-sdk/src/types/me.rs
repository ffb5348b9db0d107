//! Profile types for the authenticated user.

use serde::{Deserialize, Serialize};

use super::common::{TimeZone, Weekday};

/// Organization summary attached to a user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOrganization {
    pub is_platform: bool,
    pub id: u64,
}

/// The authenticated user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub time_format: u8,
    pub default_schedule_id: Option<u64>,
    pub week_start: Weekday,
    pub time_zone: TimeZone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<UserOrganization>,
}

/// Input for updating the authenticated user's profile; every field
/// optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserProfileInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 12 or 24.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_schedule_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start: Option<Weekday>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
    /// Language tag such as `en` or `fr`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<super::common::Metadata>,
}
