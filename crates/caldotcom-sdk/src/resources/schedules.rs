//! Availability schedule operations.

use crate::error::CalResult;
use crate::http::HttpClient;
use crate::types::{
    ApiResponse, CreateScheduleInput, ListResponse, Schedule, UpdateScheduleInput,
};

/// Schedule endpoints (`/schedules`).
#[derive(Debug)]
pub struct Schedules<'a> {
    http: &'a HttpClient,
}

impl<'a> Schedules<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists the authenticated user's schedules.
    pub async fn list(&self) -> CalResult<ListResponse<Schedule>> {
        self.http.get("/schedules").await
    }

    /// Fetches the default schedule; `None` when the user has not set one.
    pub async fn get_default(&self) -> CalResult<Option<Schedule>> {
        let response: ApiResponse<Option<Schedule>> =
            self.http.get("/schedules/default").await?;
        Ok(response.data)
    }

    /// Fetches a schedule by id.
    pub async fn get(&self, schedule_id: u64) -> CalResult<Schedule> {
        let response: ApiResponse<Schedule> =
            self.http.get(&format!("/schedules/{}", schedule_id)).await?;
        Ok(response.data)
    }

    /// Creates a schedule.
    pub async fn create(&self, input: &CreateScheduleInput) -> CalResult<Schedule> {
        let response: ApiResponse<Schedule> = self.http.post("/schedules", input).await?;
        Ok(response.data)
    }

    /// Updates a schedule.
    pub async fn update(
        &self,
        schedule_id: u64,
        input: &UpdateScheduleInput,
    ) -> CalResult<Schedule> {
        let response: ApiResponse<Schedule> = self
            .http
            .patch(&format!("/schedules/{}", schedule_id), input)
            .await?;
        Ok(response.data)
    }

    /// Deletes a schedule.
    pub async fn delete(&self, schedule_id: u64) -> CalResult<()> {
        let _: serde_json::Value = self
            .http
            .delete(&format!("/schedules/{}", schedule_id))
            .await?;
        Ok(())
    }
}
