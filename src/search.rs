use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::GrafanaClient;
use crate::errors::Result;

/// One hit from the folder/dashboard search endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderDashboardSearchResponse {
    pub id: u64,
    pub uid: String,
    pub title: String,
    pub uri: String,
    pub url: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_starred: bool,
    #[serde(default)]
    pub folder_id: u64,
    #[serde(default)]
    pub folder_uid: String,
    #[serde(default)]
    pub folder_title: String,
    #[serde(default)]
    pub folder_url: String,
}

impl GrafanaClient {
    /// Search folders and dashboards
    ///
    /// `params` is passed straight through as query parameters; see the
    /// upstream search API for the supported keys (`query`, `tag`, `type`,
    /// `dashboardIds`, `folderIds`, `starred`, `limit`, `page`).
    pub async fn folder_dashboard_search(
        &self,
        params: &[(&str, String)],
    ) -> Result<Vec<FolderDashboardSearchResponse>> {
        self.request(Method::GET, "/api/search", params, None::<&()>)
            .await
    }
}
