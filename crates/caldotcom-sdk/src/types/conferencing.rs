//! Conferencing app types.

use serde::{Deserialize, Serialize};

/// A conferencing app connected to the user's account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferencingApp {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid: Option<bool>,
}

/// The user's default conferencing app, if one is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConferencingApp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_app_list_entry() {
        let json = r#"{ "id": 3, "type": "daily_video", "userId": 7 }"#;
        let app: ConferencingApp = serde_json::from_str(json).unwrap();
        assert_eq!(app.kind, "daily_video");
        assert!(app.invalid.is_none());
    }

    #[test]
    fn parse_empty_default() {
        let default: DefaultConferencingApp = serde_json::from_str("{}").unwrap();
        assert!(default.app_slug.is_none());
    }
}
