//! Conferencing app operations.

use crate::error::CalResult;
use crate::http::HttpClient;
use crate::types::{ApiResponse, ConferencingApp, DefaultConferencingApp, ListResponse};

/// Conferencing endpoints (`/conferencing`).
#[derive(Debug)]
pub struct Conferencing<'a> {
    http: &'a HttpClient,
}

impl<'a> Conferencing<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists the user's connected conferencing apps.
    pub async fn list(&self) -> CalResult<ListResponse<ConferencingApp>> {
        self.http.get("/conferencing").await
    }

    /// Fetches the current default conferencing app. The payload is empty
    /// when none is set.
    pub async fn get_default(&self) -> CalResult<DefaultConferencingApp> {
        let response: ApiResponse<DefaultConferencingApp> =
            self.http.get("/conferencing/default").await?;
        Ok(response.data)
    }

    /// Makes `app_slug` the default conferencing app.
    pub async fn set_default(&self, app_slug: &str) -> CalResult<()> {
        let _: serde_json::Value = self
            .http
            .post(
                &format!("/conferencing/{}/default", urlencoding::encode(app_slug)),
                &serde_json::json!({}),
            )
            .await?;
        Ok(())
    }
}
