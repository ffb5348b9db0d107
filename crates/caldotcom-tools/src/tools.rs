//! Tool definitions and dispatch.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use caldotcom_sdk::types::{BookingListStatus, GetBookingsFilters};
use caldotcom_sdk::CalClient;

use crate::error::{ToolError, ToolResult};

/// Arguments accepted by `list_bookings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListBookingsArgs {
    /// Maximum number of bookings to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Status bucket to filter on.
    #[serde(default)]
    pub status: Option<BookingListStatus>,
}

fn default_limit() -> u32 {
    10
}

impl Default for ListBookingsArgs {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            status: None,
        }
    }
}

/// Routes one tool call to its implementation.
pub async fn dispatch(tool: &str, arguments: Value) -> ToolResult<Value> {
    debug!(tool, "dispatching tool call");
    match tool {
        "list_bookings" => {
            let args: ListBookingsArgs = serde_json::from_value(arguments)
                .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
            list_bookings(args).await
        }
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}

/// Lists bookings for the credentials found in the environment.
pub async fn list_bookings(args: ListBookingsArgs) -> ToolResult<Value> {
    let client = CalClient::from_env()?;

    let filters = GetBookingsFilters {
        status: args.status.into_iter().collect(),
        take: Some(args.limit),
        ..Default::default()
    };
    let response = client.bookings().list(&filters).await?;

    Ok(serde_json::json!({ "bookings": response.data }))
}
