use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::client::GrafanaClient;
use crate::errors::Result;
use crate::role::Role;

const BUILTIN_ROLES_PATH: &str = "/api/access-control/builtin-roles";

/// A custom role attached to one of the built-in roles
/// (Viewer, Editor, Admin, Grafana Admin)
///
/// Available only in Grafana Enterprise 8.+.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltInRoleAssignment {
    #[serde(rename = "builtInRole")]
    pub builtin_role: String,
    pub role_uid: String,
    #[serde(default)]
    pub global: bool,
}

impl GrafanaClient {
    /// Fetch all built-in role assignments, keyed by built-in role name
    pub async fn builtin_role_assignments(&self) -> Result<HashMap<String, Vec<Role>>> {
        self.request(Method::GET, BUILTIN_ROLES_PATH, &[], None::<&()>)
            .await
    }

    /// Attach a custom role to a built-in role
    pub async fn new_builtin_role_assignment(
        &self,
        assignment: &BuiltInRoleAssignment,
    ) -> Result<BuiltInRoleAssignment> {
        self.request(Method::POST, BUILTIN_ROLES_PATH, &[], Some(assignment))
            .await
    }

    /// Detach a custom role from a built-in role
    pub async fn delete_builtin_role_assignment(
        &self,
        assignment: &BuiltInRoleAssignment,
    ) -> Result<()> {
        let params = [("global", assignment.global.to_string())];
        let path = format!(
            "{BUILTIN_ROLES_PATH}/{}/roles/{}",
            assignment.builtin_role, assignment.role_uid
        );
        self.request_empty(Method::DELETE, &path, &params, Some(assignment))
            .await
    }
}
