//! Platform (OAuth client) managed user and webhook types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{TimeZone, Weekday};
use super::webhooks::WebhookTrigger;

/// A user provisioned and owned by an OAuth client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    pub id: u64,
    pub email: String,
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub time_zone: TimeZone,
    pub week_start: Weekday,
    pub created_date: DateTime<Utc>,
    pub time_format: Option<u8>,
    pub default_schedule_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Input for creating a managed user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateManagedUserInput {
    pub email: String,
    pub name: String,
    /// 12 or 24.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start: Option<Weekday>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl CreateManagedUserInput {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            time_format: None,
            week_start: None,
            time_zone: None,
            locale: None,
            avatar_url: None,
        }
    }
}

/// Creation response: the user plus its token pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateManagedUserData {
    pub user: ManagedUser,
    pub access_token: String,
    pub refresh_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_expires_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_at: Option<u64>,
}

/// Input for updating a managed user's profile. Same field set as a
/// self-serve profile update.
pub type UpdateManagedUserInput = super::me::UpdateUserProfileInput;

/// A fresh token pair from a forced refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceRefreshOutput {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_expires_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_at: Option<u64>,
}

/// A webhook owned by an OAuth client rather than a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformWebhook {
    pub id: u64,
    #[serde(rename = "oAuthClientId")]
    pub oauth_client_id: String,
    pub payload_template: Option<String>,
    pub triggers: Vec<WebhookTrigger>,
    pub subscriber_url: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_created_managed_user() {
        let json = r#"{
            "user": {
                "id": 101,
                "email": "managed+clid@example.com",
                "username": "managed-clid",
                "timeZone": "UTC",
                "weekStart": "Sunday",
                "createdDate": "2024-08-13T10:00:00Z",
                "timeFormat": 12,
                "defaultScheduleId": null
            },
            "accessToken": "at_abc",
            "refreshToken": "rt_def",
            "accessTokenExpiresAt": 1723543200000
        }"#;
        let data: CreateManagedUserData = serde_json::from_str(json).unwrap();
        assert_eq!(data.user.id, 101);
        assert_eq!(data.access_token, "at_abc");
        assert!(data.refresh_token_expires_at.is_none());
    }

    #[test]
    fn parse_platform_webhook() {
        let json = r#"{
            "id": 4,
            "oAuthClientId": "clid_1",
            "payloadTemplate": null,
            "triggers": ["BOOKING_CREATED"],
            "subscriberUrl": "https://hooks.example.test/platform",
            "active": true
        }"#;
        let webhook: PlatformWebhook = serde_json::from_str(json).unwrap();
        assert_eq!(webhook.oauth_client_id, "clid_1");
    }
}
