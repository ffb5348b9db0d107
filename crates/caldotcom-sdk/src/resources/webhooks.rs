//! User webhook operations.

use crate::error::CalResult;
use crate::http::HttpClient;
use crate::types::{ApiResponse, CreateWebhookInput, ListResponse, UpdateWebhookInput, Webhook};

/// Webhook endpoints (`/webhooks`).
#[derive(Debug)]
pub struct Webhooks<'a> {
    http: &'a HttpClient,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists the authenticated user's webhooks.
    pub async fn list(&self) -> CalResult<ListResponse<Webhook>> {
        self.http.get("/webhooks").await
    }

    /// Creates a webhook.
    pub async fn create(&self, input: &CreateWebhookInput) -> CalResult<Webhook> {
        let response: ApiResponse<Webhook> = self.http.post("/webhooks", input).await?;
        Ok(response.data)
    }

    /// Fetches a webhook by id.
    pub async fn get(&self, webhook_id: u64) -> CalResult<Webhook> {
        let response: ApiResponse<Webhook> =
            self.http.get(&format!("/webhooks/{}", webhook_id)).await?;
        Ok(response.data)
    }

    /// Updates a webhook.
    pub async fn update(&self, webhook_id: u64, input: &UpdateWebhookInput) -> CalResult<Webhook> {
        let response: ApiResponse<Webhook> = self
            .http
            .patch(&format!("/webhooks/{}", webhook_id), input)
            .await?;
        Ok(response.data)
    }

    /// Deletes a webhook.
    pub async fn delete(&self, webhook_id: u64) -> CalResult<()> {
        let _: serde_json::Value = self
            .http
            .delete(&format!("/webhooks/{}", webhook_id))
            .await?;
        Ok(())
    }
}
