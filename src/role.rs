use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::GrafanaClient;
use crate::errors::Result;

/// An access-control role with its permissions
///
/// Available only in Grafana Enterprise 8.+.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default)]
    pub version: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub global: bool,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
}

/// A single action/scope pair granted by a role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub action: String,
    #[serde(default)]
    pub scope: String,
}

/// Users, teams and service accounts a role is assigned to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignments {
    pub role_uid: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_accounts: Vec<i64>,
}

fn role_path(uid: &str) -> String {
    format!("/api/access-control/roles/{uid}")
}

impl GrafanaClient {
    /// Fetch a role with its permissions by UID
    pub async fn role(&self, uid: &str) -> Result<Role> {
        self.request(Method::GET, &role_path(uid), &[], None::<&()>)
            .await
    }

    /// Create a new role with permissions
    pub async fn new_role(&self, role: &Role) -> Result<Role> {
        self.request(Method::POST, "/api/access-control/roles", &[], Some(role))
            .await
    }

    /// Update a role and its permissions
    pub async fn update_role(&self, role: &Role) -> Result<()> {
        let uid = role.uid.as_deref().unwrap_or_default();
        self.request_empty(Method::PUT, &role_path(uid), &[], Some(role))
            .await
    }

    /// Delete a role along with its permissions
    pub async fn delete_role(&self, uid: &str, global: bool) -> Result<()> {
        let params = [("global", global.to_string())];
        self.request_empty(Method::DELETE, &role_path(uid), &params, None::<&()>)
            .await
    }

    /// Fetch the assignments for a role
    pub async fn role_assignments(&self, uid: &str) -> Result<RoleAssignments> {
        self.request(
            Method::GET,
            &format!("/api/access-control/roles/{uid}/assignments"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Replace the assignments for a role, returning the stored set
    pub async fn update_role_assignments(
        &self,
        assignments: &RoleAssignments,
    ) -> Result<RoleAssignments> {
        self.request(
            Method::PUT,
            &format!(
                "/api/access-control/roles/{}/assignments",
                assignments.role_uid
            ),
            &[],
            Some(assignments),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Credentials;
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ROLE_JSON: &str = r#"{
        "version": 2,
        "uid": "vc3SCSsGz",
        "name": "custom:reports:admin",
        "description": "Manage reports",
        "global": false,
        "group": "Reports",
        "displayName": "Report admin",
        "hidden": false,
        "permissions": [
            {"action": "reports:read", "scope": "reports:*"},
            {"action": "reports:write", "scope": "reports:*"}
        ]
    }"#;

    async fn test_client(server: &MockServer) -> GrafanaClient {
        GrafanaClient::new(
            Url::parse(&server.uri()).unwrap(),
            Credentials::Anonymous,
            Duration::from_secs(10),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_role_by_uid() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/access-control/roles/vc3SCSsGz"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ROLE_JSON))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let role = client.role("vc3SCSsGz").await.unwrap();

        assert_eq!(role.name, "custom:reports:admin");
        assert_eq!(role.permissions.len(), 2);
        assert_eq!(role.permissions[0].action, "reports:read");
    }

    #[tokio::test]
    async fn test_new_role_returns_created_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/access-control/roles"))
            .respond_with(ResponseTemplate::new(201).set_body_string(ROLE_JSON))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let role = Role {
            name: "custom:reports:admin".to_string(),
            permissions: vec![Permission {
                action: "reports:read".to_string(),
                scope: "reports:*".to_string(),
            }],
            ..Role::default()
        };
        let created = client.new_role(&role).await.unwrap();
        assert_eq!(created.uid.as_deref(), Some("vc3SCSsGz"));
        assert_eq!(created.version, 2);
    }

    #[tokio::test]
    async fn test_delete_role_sends_global_param() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/access-control/roles/vc3SCSsGz"))
            .and(query_param("global", "true"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        assert!(client.delete_role("vc3SCSsGz", true).await.is_ok());
    }

    #[tokio::test]
    async fn test_role_assignments_round_trip() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/access-control/roles/vc3SCSsGz/assignments"))
            .and(body_json(serde_json::json!({
                "role_uid": "vc3SCSsGz",
                "users": [1, 2],
                "teams": [7],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"role_uid":"vc3SCSsGz","users":[1,2],"teams":[7]}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let assignments = RoleAssignments {
            role_uid: "vc3SCSsGz".to_string(),
            users: vec![1, 2],
            teams: vec![7],
            service_accounts: vec![],
        };
        let stored = client.update_role_assignments(&assignments).await.unwrap();
        assert_eq!(stored, assignments);
    }

    #[tokio::test]
    async fn test_role_assignments_fetch() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/access-control/roles/vc3SCSsGz/assignments"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"role_uid":"vc3SCSsGz","service_accounts":[9]}"#,
            ))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let assignments = client.role_assignments("vc3SCSsGz").await.unwrap();
        assert_eq!(assignments.service_accounts, vec![9]);
        assert!(assignments.users.is_empty());
    }

    #[test]
    fn test_role_serialization_omits_empty_permissions() {
        let role = Role {
            name: "custom:empty".to_string(),
            ..Role::default()
        };
        let value = serde_json::to_value(&role).unwrap();
        assert!(!value.as_object().unwrap().contains_key("permissions"));
        assert!(!value.as_object().unwrap().contains_key("uid"));
    }
}
