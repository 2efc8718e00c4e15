use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::GrafanaClient;
use crate::errors::Result;

/// Display preferences, shared by the org-level and team-level endpoints
///
/// Unset fields are omitted from request bodies so a PATCH only touches the
/// fields that are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_dashboard_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_dashboard_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start: Option<String>,
}

/// Response to an org preferences update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrgPreferencesResponse {
    pub message: String,
}

impl GrafanaClient {
    /// Fetch the current org's preferences
    pub async fn org_preferences(&self) -> Result<Preferences> {
        self.request(Method::GET, "/api/org/preferences", &[], None::<&()>)
            .await
    }

    /// Update only the org preferences present in `preferences`,
    /// leaving the rest untouched
    pub async fn update_org_preferences(
        &self,
        preferences: &Preferences,
    ) -> Result<UpdateOrgPreferencesResponse> {
        self.request(Method::PATCH, "/api/org/preferences", &[], Some(preferences))
            .await
    }

    /// Overwrite all org preferences with `preferences`
    pub async fn update_all_org_preferences(
        &self,
        preferences: &Preferences,
    ) -> Result<UpdateOrgPreferencesResponse> {
        self.request(Method::PUT, "/api/org/preferences", &[], Some(preferences))
            .await
    }
}
