//! Connected calendar operations.

use crate::error::CalResult;
use crate::http::{HttpClient, Query};
use crate::types::{
    ApiResponse, CalendarDestination, ConnectedCalendarsData, SelectedCalendar,
    SelectedCalendarInput,
};

/// Calendar endpoints (`/calendars` and the selection/destination routes).
#[derive(Debug)]
pub struct Calendars<'a> {
    http: &'a HttpClient,
}

impl<'a> Calendars<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists every connected calendar plus the destination calendar.
    pub async fn list(&self) -> CalResult<ConnectedCalendarsData> {
        let response: ApiResponse<ConnectedCalendarsData> = self.http.get("/calendars").await?;
        Ok(response.data)
    }

    /// Changes where new events are written.
    pub async fn update_destination(
        &self,
        input: &SelectedCalendarInput,
    ) -> CalResult<CalendarDestination> {
        let response: ApiResponse<CalendarDestination> =
            self.http.put("/destination-calendars", input).await?;
        Ok(response.data)
    }

    /// Marks a calendar as checked for conflicts.
    pub async fn add_selected(&self, input: &SelectedCalendarInput) -> CalResult<SelectedCalendar> {
        let response: ApiResponse<SelectedCalendar> =
            self.http.post("/selected-calendars", input).await?;
        Ok(response.data)
    }

    /// Stops checking a calendar for conflicts.
    ///
    /// The API takes the selector as query parameters on DELETE, not as a
    /// body.
    pub async fn remove_selected(
        &self,
        input: &SelectedCalendarInput,
    ) -> CalResult<SelectedCalendar> {
        let mut query = Query::new()
            .with("integration", &input.integration)
            .with("externalId", &input.external_id)
            .with("credentialId", input.credential_id);
        query.push_opt(
            "delegationCredentialId",
            input.delegation_credential_id.as_deref(),
        );
        let response: ApiResponse<SelectedCalendar> =
            self.http.delete_query("/selected-calendars", query).await?;
        Ok(response.data)
    }
}
