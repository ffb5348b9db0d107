//! Team, membership and team event type operations.

use crate::error::CalResult;
use crate::http::HttpClient;
use crate::types::{
    ApiResponse, CreateTeamEventTypeInput, CreateTeamInput, CreateTeamMembershipInput,
    ListResponse, Team, TeamEventType, TeamMembership, UpdateTeamEventTypeInput,
    UpdateTeamInput, UpdateTeamMembershipInput,
};

/// Team endpoints (`/teams`), including memberships and team event types.
#[derive(Debug)]
pub struct Teams<'a> {
    http: &'a HttpClient,
}

impl<'a> Teams<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists teams the authenticated user belongs to.
    pub async fn list(&self) -> CalResult<ListResponse<Team>> {
        self.http.get("/teams").await
    }

    /// Creates a team owned by the authenticated user.
    pub async fn create(&self, input: &CreateTeamInput) -> CalResult<Team> {
        let response: ApiResponse<Team> = self.http.post("/teams", input).await?;
        Ok(response.data)
    }

    /// Fetches a team by id.
    pub async fn get(&self, team_id: u64) -> CalResult<Team> {
        let response: ApiResponse<Team> = self.http.get(&format!("/teams/{}", team_id)).await?;
        Ok(response.data)
    }

    /// Updates a team.
    pub async fn update(&self, team_id: u64, input: &UpdateTeamInput) -> CalResult<Team> {
        let response: ApiResponse<Team> =
            self.http.patch(&format!("/teams/{}", team_id), input).await?;
        Ok(response.data)
    }

    /// Deletes a team.
    pub async fn delete(&self, team_id: u64) -> CalResult<()> {
        let _: serde_json::Value = self.http.delete(&format!("/teams/{}", team_id)).await?;
        Ok(())
    }

    /// Lists a team's memberships.
    pub async fn list_memberships(&self, team_id: u64) -> CalResult<ListResponse<TeamMembership>> {
        self.http
            .get(&format!("/teams/{}/memberships", team_id))
            .await
    }

    /// Adds a user to a team.
    pub async fn create_membership(
        &self,
        team_id: u64,
        input: &CreateTeamMembershipInput,
    ) -> CalResult<TeamMembership> {
        let response: ApiResponse<TeamMembership> = self
            .http
            .post(&format!("/teams/{}/memberships", team_id), input)
            .await?;
        Ok(response.data)
    }

    /// Fetches one membership.
    pub async fn get_membership(
        &self,
        team_id: u64,
        membership_id: u64,
    ) -> CalResult<TeamMembership> {
        let response: ApiResponse<TeamMembership> = self
            .http
            .get(&format!("/teams/{}/memberships/{}", team_id, membership_id))
            .await?;
        Ok(response.data)
    }

    /// Updates a membership's role or acceptance.
    pub async fn update_membership(
        &self,
        team_id: u64,
        membership_id: u64,
        input: &UpdateTeamMembershipInput,
    ) -> CalResult<TeamMembership> {
        let response: ApiResponse<TeamMembership> = self
            .http
            .patch(
                &format!("/teams/{}/memberships/{}", team_id, membership_id),
                input,
            )
            .await?;
        Ok(response.data)
    }

    /// Removes a user from a team.
    pub async fn delete_membership(&self, team_id: u64, membership_id: u64) -> CalResult<()> {
        let _: serde_json::Value = self
            .http
            .delete(&format!("/teams/{}/memberships/{}", team_id, membership_id))
            .await?;
        Ok(())
    }

    /// Lists a team's event types.
    pub async fn list_event_types(&self, team_id: u64) -> CalResult<ListResponse<TeamEventType>> {
        self.http
            .get(&format!("/teams/{}/event-types", team_id))
            .await
    }

    /// Creates a team event type.
    pub async fn create_event_type(
        &self,
        team_id: u64,
        input: &CreateTeamEventTypeInput,
    ) -> CalResult<TeamEventType> {
        let response: ApiResponse<TeamEventType> = self
            .http
            .post(&format!("/teams/{}/event-types", team_id), input)
            .await?;
        Ok(response.data)
    }

    /// Fetches one team event type.
    pub async fn get_event_type(
        &self,
        team_id: u64,
        event_type_id: u64,
    ) -> CalResult<TeamEventType> {
        let response: ApiResponse<TeamEventType> = self
            .http
            .get(&format!("/teams/{}/event-types/{}", team_id, event_type_id))
            .await?;
        Ok(response.data)
    }

    /// Updates a team event type.
    pub async fn update_event_type(
        &self,
        team_id: u64,
        event_type_id: u64,
        input: &UpdateTeamEventTypeInput,
    ) -> CalResult<TeamEventType> {
        let response: ApiResponse<TeamEventType> = self
            .http
            .patch(
                &format!("/teams/{}/event-types/{}", team_id, event_type_id),
                input,
            )
            .await?;
        Ok(response.data)
    }

    /// Deletes a team event type.
    pub async fn delete_event_type(&self, team_id: u64, event_type_id: u64) -> CalResult<()> {
        let _: serde_json::Value = self
            .http
            .delete(&format!("/teams/{}/event-types/{}", team_id, event_type_id))
            .await?;
        Ok(())
    }
}
