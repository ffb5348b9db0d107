//! Organization sub-resources: teams and member attributes.

use crate::error::CalResult;
use crate::http::HttpClient;
use crate::types::{
    ApiResponse, CreateOrganizationAttributeInput, CreateTeamInput, ListResponse,
    OrganizationAttribute, Team, UpdateTeamInput,
};

/// Entry point for organization-scoped endpoints (`/organizations/{orgId}`).
#[derive(Debug)]
pub struct Organizations<'a> {
    http: &'a HttpClient,
}

impl<'a> Organizations<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Team endpoints scoped to an organization.
    pub fn teams(&self, org_id: u64) -> OrgTeams<'a> {
        OrgTeams {
            http: self.http,
            org_id,
        }
    }

    /// Attribute endpoints scoped to an organization.
    pub fn attributes(&self, org_id: u64) -> OrgAttributes<'a> {
        OrgAttributes {
            http: self.http,
            org_id,
        }
    }
}

/// `/organizations/{orgId}/teams`.
#[derive(Debug)]
pub struct OrgTeams<'a> {
    http: &'a HttpClient,
    org_id: u64,
}

impl OrgTeams<'_> {
    fn path(&self, suffix: &str) -> String {
        format!("/organizations/{}/teams{}", self.org_id, suffix)
    }

    /// Lists the organization's teams.
    pub async fn list(&self) -> CalResult<ListResponse<Team>> {
        self.http.get(&self.path("")).await
    }

    /// Creates a team inside the organization.
    pub async fn create(&self, input: &CreateTeamInput) -> CalResult<Team> {
        let response: ApiResponse<Team> = self.http.post(&self.path(""), input).await?;
        Ok(response.data)
    }

    /// Fetches one of the organization's teams.
    pub async fn get(&self, team_id: u64) -> CalResult<Team> {
        let response: ApiResponse<Team> =
            self.http.get(&self.path(&format!("/{}", team_id))).await?;
        Ok(response.data)
    }

    /// Updates one of the organization's teams.
    pub async fn update(&self, team_id: u64, input: &UpdateTeamInput) -> CalResult<Team> {
        let response: ApiResponse<Team> = self
            .http
            .patch(&self.path(&format!("/{}", team_id)), input)
            .await?;
        Ok(response.data)
    }

    /// Deletes one of the organization's teams.
    pub async fn delete(&self, team_id: u64) -> CalResult<()> {
        let _: serde_json::Value = self
            .http
            .delete(&self.path(&format!("/{}", team_id)))
            .await?;
        Ok(())
    }
}

/// `/organizations/{orgId}/attributes`.
#[derive(Debug)]
pub struct OrgAttributes<'a> {
    http: &'a HttpClient,
    org_id: u64,
}

impl OrgAttributes<'_> {
    fn path(&self, suffix: &str) -> String {
        format!("/organizations/{}/attributes{}", self.org_id, suffix)
    }

    /// Lists the organization's member attributes.
    pub async fn list(&self) -> CalResult<ListResponse<OrganizationAttribute>> {
        self.http.get(&self.path("")).await
    }

    /// Defines a new member attribute.
    pub async fn create(
        &self,
        input: &CreateOrganizationAttributeInput,
    ) -> CalResult<OrganizationAttribute> {
        let response: ApiResponse<OrganizationAttribute> =
            self.http.post(&self.path(""), input).await?;
        Ok(response.data)
    }

    /// Fetches one attribute. Attribute ids are opaque strings.
    pub async fn get(&self, attribute_id: &str) -> CalResult<OrganizationAttribute> {
        let response: ApiResponse<OrganizationAttribute> = self
            .http
            .get(&self.path(&format!("/{}", urlencoding::encode(attribute_id))))
            .await?;
        Ok(response.data)
    }

    /// Deletes an attribute.
    pub async fn delete(&self, attribute_id: &str) -> CalResult<()> {
        let _: serde_json::Value = self
            .http
            .delete(&self.path(&format!("/{}", urlencoding::encode(attribute_id))))
            .await?;
        Ok(())
    }
}
