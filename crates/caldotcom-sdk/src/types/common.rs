//! Envelope and shared types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// IANA timezone name, e.g. `America/New_York`.
pub type TimeZone = String;

/// BCP 47-ish language code as accepted by the API (e.g. `en`, `pt-BR`).
pub type LanguageCode = String;

/// Free-form metadata attached to resources.
///
/// The API constrains this to at most 50 keys, key length 40, value
/// length 500; limits are enforced server-side.
pub type Metadata = HashMap<String, serde_json::Value>;

/// Single-resource success envelope: `{ "status": "success", "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// `"success"` on the happy path; failures never reach deserialization.
    pub status: String,
    /// The payload.
    pub data: T,
}

/// Cursor metadata attached to list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether another page exists after this one.
    pub has_next_page: bool,
    /// Opaque cursor for the next page.
    pub end_cursor: Option<String>,
    /// Total item count, when the API reports it.
    pub total_count: Option<u64>,
}

/// List success envelope, optionally carrying pagination metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    /// `"success"` on the happy path.
    pub status: String,
    /// The items.
    pub data: Vec<T>,
    /// Cursor metadata, passed through verbatim.
    pub page_info: Option<PageInfo>,
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// The value sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Day of week as the API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}
