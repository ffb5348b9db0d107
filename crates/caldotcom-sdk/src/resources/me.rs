//! Profile operations for the authenticated user.

use crate::error::CalResult;
use crate::http::HttpClient;
use crate::types::{ApiResponse, UpdateUserProfileInput, UserProfile};

/// Profile endpoints (`/me`).
#[derive(Debug)]
pub struct Me<'a> {
    http: &'a HttpClient,
}

impl<'a> Me<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Fetches the authenticated user's profile.
    pub async fn get(&self) -> CalResult<UserProfile> {
        let response: ApiResponse<UserProfile> = self.http.get("/me").await?;
        Ok(response.data)
    }

    /// Updates the authenticated user's profile.
    pub async fn update(&self, input: &UpdateUserProfileInput) -> CalResult<UserProfile> {
        let response: ApiResponse<UserProfile> = self.http.patch("/me", input).await?;
        Ok(response.data)
    }
}
