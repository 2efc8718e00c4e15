use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::GrafanaClient;
use crate::errors::Result;
use crate::preferences::Preferences;

/// Result page of a team search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTeam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<Team>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

/// A Grafana team, as returned by get and accepted by add/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,
    pub name: String,
    /// Optional; when absent it is omitted from the request body entirely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<i64>,
}

/// A member of a Grafana team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// An external group mapped to a team for membership sync
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(rename = "groupID", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AddTeamResponse {
    #[serde(rename = "teamId")]
    team_id: i64,
}

impl GrafanaClient {
    /// Search teams by query string
    pub async fn search_team(&self, query: &str) -> Result<SearchTeam> {
        let params = [
            ("page", "1".to_string()),
            ("perPage", "1000".to_string()),
            ("query", query.to_string()),
        ];
        self.request(Method::GET, "/api/teams/search", &params, None::<&()>)
            .await
    }

    /// Fetch a team by ID
    pub async fn team(&self, id: i64) -> Result<Team> {
        self.request(Method::GET, &format!("/api/teams/{id}"), &[], None::<&()>)
            .await
    }

    /// Create a team and return its ID
    ///
    /// `email` is optional; pass `None` to leave it unset (the field is then
    /// omitted from the request body rather than sent as an empty string).
    pub async fn add_team(&self, name: &str, email: Option<&str>) -> Result<i64> {
        let team = Team {
            name: name.to_string(),
            email: email.map(str::to_string),
            ..Team::default()
        };
        let created: AddTeamResponse = self
            .request(Method::POST, "/api/teams", &[], Some(&team))
            .await?;
        Ok(created.team_id)
    }

    /// Update a team's name and, optionally, email
    pub async fn update_team(&self, id: i64, name: &str, email: Option<&str>) -> Result<()> {
        let team = Team {
            name: name.to_string(),
            email: email.map(str::to_string),
            ..Team::default()
        };
        self.request_empty(Method::PUT, &format!("/api/teams/{id}"), &[], Some(&team))
            .await
    }

    /// Delete a team by ID
    pub async fn delete_team(&self, id: i64) -> Result<()> {
        self.request_empty(Method::DELETE, &format!("/api/teams/{id}"), &[], None::<&()>)
            .await
    }

    /// Fetch the members of a team
    pub async fn team_members(&self, id: i64) -> Result<Vec<TeamMember>> {
        self.request(
            Method::GET,
            &format!("/api/teams/{id}/members"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Add a user to a team
    pub async fn add_team_member(&self, id: i64, user_id: i64) -> Result<()> {
        let member = TeamMember {
            user_id: Some(user_id),
            ..TeamMember::default()
        };
        self.request_empty(
            Method::POST,
            &format!("/api/teams/{id}/members"),
            &[],
            Some(&member),
        )
        .await
    }

    /// Remove a user from a team
    pub async fn remove_member_from_team(&self, id: i64, user_id: i64) -> Result<()> {
        self.request_empty(
            Method::DELETE,
            &format!("/api/teams/{id}/members/{user_id}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Fetch a team's preferences
    pub async fn team_preferences(&self, id: i64) -> Result<Preferences> {
        self.request(
            Method::GET,
            &format!("/api/teams/{id}/preferences"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Update a team's preferences
    pub async fn update_team_preferences(&self, id: i64, preferences: &Preferences) -> Result<()> {
        self.request_empty(
            Method::PUT,
            &format!("/api/teams/{id}/preferences"),
            &[],
            Some(preferences),
        )
        .await
    }

    /// Fetch the external groups mapped to a team
    pub async fn team_groups(&self, id: i64) -> Result<Vec<TeamGroup>> {
        self.request(
            Method::GET,
            &format!("/api/teams/{id}/groups"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Map an external group to a team
    pub async fn new_team_group(&self, id: i64, group_id: &str) -> Result<()> {
        let body = serde_json::json!({ "groupId": group_id });
        self.request_empty(
            Method::POST,
            &format!("/api/teams/{id}/groups"),
            &[],
            Some(&body),
        )
        .await
    }

    /// Unmap an external group from a team
    pub async fn delete_team_group(&self, id: i64, group_id: &str) -> Result<()> {
        self.request_empty(
            Method::DELETE,
            &format!("/api/teams/{id}/groups/{group_id}"),
            &[],
            None::<&()>,
        )
        .await
    }
}
