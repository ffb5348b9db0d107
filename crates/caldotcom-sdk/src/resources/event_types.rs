//! Event type operations.

use crate::error::{CalError, CalResult};
use crate::http::{HttpClient, Query};
use crate::types::{
    ApiResponse, CreateEventTypeInput, EventType, GetEventTypesFilters, ListResponse,
    UpdateEventTypeInput,
};

/// Event type endpoints (`/event-types`).
#[derive(Debug)]
pub struct EventTypes<'a> {
    http: &'a HttpClient,
}

impl<'a> EventTypes<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Creates an event type for the authenticated user.
    pub async fn create(&self, input: &CreateEventTypeInput) -> CalResult<EventType> {
        let response: ApiResponse<EventType> = self.http.post("/event-types", input).await?;
        Ok(response.data)
    }

    /// Lists event types matching the filters.
    pub async fn list(
        &self,
        filters: &GetEventTypesFilters,
    ) -> CalResult<ListResponse<EventType>> {
        let mut query = Query::new();
        query.push_opt("username", filters.username.as_deref());
        query.push_opt("teamSlug", filters.team_slug.as_deref());
        query.push_opt("orgSlug", filters.organization_slug.as_deref());
        query.push_opt("includeHidden", filters.include_hidden);
        self.http.get_query("/event-types", query).await
    }

    /// Fetches an event type by id.
    pub async fn get(&self, event_type_id: u64) -> CalResult<EventType> {
        let response: ApiResponse<EventType> = self
            .http
            .get(&format!("/event-types/{}", event_type_id))
            .await?;
        Ok(response.data)
    }

    /// Fetches one user's event type by its slug.
    ///
    /// The API only exposes slug lookup through the list endpoint, so an
    /// empty result maps to [`CalError::NotFound`].
    pub async fn get_by_slug(&self, username: &str, slug: &str) -> CalResult<EventType> {
        let query = Query::new()
            .with("username", username)
            .with("eventSlug", slug);
        let response: ListResponse<EventType> =
            self.http.get_query("/event-types", query).await?;
        response.data.into_iter().next().ok_or_else(|| {
            CalError::NotFound(format!("no event type {} for user {}", slug, username))
        })
    }

    /// Updates an event type.
    pub async fn update(
        &self,
        event_type_id: u64,
        input: &UpdateEventTypeInput,
    ) -> CalResult<EventType> {
        let response: ApiResponse<EventType> = self
            .http
            .patch(&format!("/event-types/{}", event_type_id), input)
            .await?;
        Ok(response.data)
    }

    /// Deletes an event type.
    pub async fn delete(&self, event_type_id: u64) -> CalResult<()> {
        let _: serde_json::Value = self
            .http
            .delete(&format!("/event-types/{}", event_type_id))
            .await?;
        Ok(())
    }
}
