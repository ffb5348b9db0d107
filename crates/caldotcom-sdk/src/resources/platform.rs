//! Platform (OAuth client) operations: managed users and client webhooks.
//!
//! Every route here nests under `/oauth-clients/{clientId}`, so these
//! resources require the OAuth client credential variant and fail fast
//! with a configuration error for any other.

use crate::error::CalResult;
use crate::http::HttpClient;
use crate::types::{
    ApiResponse, CreateManagedUserData, CreateManagedUserInput, CreateWebhookInput,
    ForceRefreshOutput, ListResponse, ManagedUser, PlatformWebhook, UpdateManagedUserInput,
    UpdateWebhookInput,
};

/// Entry point for platform endpoints.
#[derive(Debug)]
pub struct Platform<'a> {
    http: &'a HttpClient,
}

impl<'a> Platform<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Managed user endpoints.
    pub fn managed_users(&self) -> ManagedUsers<'a> {
        ManagedUsers { http: self.http }
    }

    /// OAuth-client-level webhook endpoints.
    pub fn webhooks(&self) -> PlatformWebhooks<'a> {
        PlatformWebhooks { http: self.http }
    }
}

/// `/oauth-clients/{clientId}/users`.
#[derive(Debug)]
pub struct ManagedUsers<'a> {
    http: &'a HttpClient,
}

impl ManagedUsers<'_> {
    fn path(&self, suffix: &str) -> CalResult<String> {
        let client_id = self.http.auth().client_id()?;
        Ok(format!(
            "/oauth-clients/{}/users{}",
            urlencoding::encode(client_id),
            suffix
        ))
    }

    /// Lists the client's managed users.
    pub async fn list(&self) -> CalResult<ListResponse<ManagedUser>> {
        self.http.get(&self.path("")?).await
    }

    /// Provisions a managed user; the response carries its token pair.
    pub async fn create(&self, input: &CreateManagedUserInput) -> CalResult<CreateManagedUserData> {
        let response: ApiResponse<CreateManagedUserData> =
            self.http.post(&self.path("")?, input).await?;
        Ok(response.data)
    }

    /// Fetches a managed user.
    pub async fn get(&self, user_id: u64) -> CalResult<ManagedUser> {
        let response: ApiResponse<ManagedUser> =
            self.http.get(&self.path(&format!("/{}", user_id))?).await?;
        Ok(response.data)
    }

    /// Updates a managed user's profile.
    pub async fn update(
        &self,
        user_id: u64,
        input: &UpdateManagedUserInput,
    ) -> CalResult<ManagedUser> {
        let response: ApiResponse<ManagedUser> = self
            .http
            .patch(&self.path(&format!("/{}", user_id))?, input)
            .await?;
        Ok(response.data)
    }

    /// Deletes a managed user.
    pub async fn delete(&self, user_id: u64) -> CalResult<ManagedUser> {
        let response: ApiResponse<ManagedUser> = self
            .http
            .delete(&self.path(&format!("/{}", user_id))?)
            .await?;
        Ok(response.data)
    }

    /// Invalidates a managed user's tokens and issues a fresh pair.
    pub async fn force_refresh(&self, user_id: u64) -> CalResult<ForceRefreshOutput> {
        let response: ApiResponse<ForceRefreshOutput> = self
            .http
            .post(
                &self.path(&format!("/{}/force-refresh", user_id))?,
                &serde_json::json!({}),
            )
            .await?;
        Ok(response.data)
    }
}

/// `/oauth-clients/{clientId}/webhooks`.
#[derive(Debug)]
pub struct PlatformWebhooks<'a> {
    http: &'a HttpClient,
}

impl PlatformWebhooks<'_> {
    fn path(&self, suffix: &str) -> CalResult<String> {
        let client_id = self.http.auth().client_id()?;
        Ok(format!(
            "/oauth-clients/{}/webhooks{}",
            urlencoding::encode(client_id),
            suffix
        ))
    }

    /// Lists the client's webhooks.
    pub async fn list(&self) -> CalResult<ListResponse<PlatformWebhook>> {
        self.http.get(&self.path("")?).await
    }

    /// Creates a client-level webhook.
    pub async fn create(&self, input: &CreateWebhookInput) -> CalResult<PlatformWebhook> {
        let response: ApiResponse<PlatformWebhook> =
            self.http.post(&self.path("")?, input).await?;
        Ok(response.data)
    }

    /// Fetches a client-level webhook.
    pub async fn get(&self, webhook_id: u64) -> CalResult<PlatformWebhook> {
        let response: ApiResponse<PlatformWebhook> = self
            .http
            .get(&self.path(&format!("/{}", webhook_id))?)
            .await?;
        Ok(response.data)
    }

    /// Updates a client-level webhook.
    pub async fn update(
        &self,
        webhook_id: u64,
        input: &UpdateWebhookInput,
    ) -> CalResult<PlatformWebhook> {
        let response: ApiResponse<PlatformWebhook> = self
            .http
            .patch(&self.path(&format!("/{}", webhook_id))?, input)
            .await?;
        Ok(response.data)
    }

    /// Deletes a client-level webhook.
    pub async fn delete(&self, webhook_id: u64) -> CalResult<()> {
        let _: serde_json::Value = self
            .http
            .delete(&self.path(&format!("/{}", webhook_id))?)
            .await?;
        Ok(())
    }
}
