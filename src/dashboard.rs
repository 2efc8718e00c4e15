use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::GrafanaClient;
use crate::errors::{GrafanaError, Result};
use crate::search::FolderDashboardSearchResponse;

/// Metadata block returned alongside a dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMeta {
    pub is_starred: bool,
    pub slug: String,
    #[serde(rename = "folderId")]
    pub folder: i64,
    pub url: String,
}

/// Response to creating or saving a dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSaveResponse {
    pub slug: String,
    pub id: i64,
    pub uid: String,
    pub status: String,
    pub version: i64,
}

/// A Grafana dashboard
///
/// The dashboard model itself is an open JSON object whose schema evolves
/// independently of this client; unknown keys survive a decode/encode cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default)]
    pub meta: DashboardMeta,
    #[serde(rename = "dashboard")]
    pub model: Map<String, Value>,
    #[serde(default)]
    pub folder_id: i64,
    #[serde(default)]
    pub folder_uid: String,
    #[serde(default)]
    pub overwrite: bool,

    /// Only used when creating a new dashboard, always empty when getting one
    #[serde(default)]
    pub message: String,
}

impl GrafanaClient {
    /// Save a dashboard from a raw model map
    #[deprecated(note = "use `new_dashboard` instead")]
    pub async fn save_dashboard(
        &self,
        model: Map<String, Value>,
        overwrite: bool,
    ) -> Result<DashboardSaveResponse> {
        let wrapper = serde_json::json!({
            "dashboard": model,
            "overwrite": overwrite,
        });
        self.request(Method::POST, "/api/dashboards/db", &[], Some(&wrapper))
            .await
    }

    /// Create a new dashboard
    pub async fn new_dashboard(&self, dashboard: Dashboard) -> Result<DashboardSaveResponse> {
        self.request(Method::POST, "/api/dashboards/db", &[], Some(&dashboard))
            .await
    }

    /// Fetch all dashboards
    pub async fn dashboards(&self) -> Result<Vec<FolderDashboardSearchResponse>> {
        self.folder_dashboard_search(&[("type", "dash-db".to_string())])
            .await
    }

    /// Fetch a dashboard by slug
    ///
    /// Slug lookups may 404 where UID lookups succeed.
    #[deprecated(note = "starting from Grafana v5.0, use `dashboard_by_uid` instead")]
    pub async fn dashboard(&self, slug: &str) -> Result<Dashboard> {
        self.fetch_dashboard(&format!("/api/dashboards/db/{slug}"))
            .await
    }

    /// Fetch a dashboard by UID
    pub async fn dashboard_by_uid(&self, uid: &str) -> Result<Dashboard> {
        self.fetch_dashboard(&format!("/api/dashboards/uid/{uid}"))
            .await
    }

    /// Find dashboards by a list of dashboard IDs using the search endpoint
    pub async fn dashboards_by_ids(
        &self,
        ids: &[i64],
    ) -> Result<Vec<FolderDashboardSearchResponse>> {
        let ids_json = serde_json::to_string(ids).map_err(GrafanaError::Encode)?;
        self.folder_dashboard_search(&[
            ("type", "dash-db".to_string()),
            ("dashboardIds", ids_json),
        ])
        .await
    }

    async fn fetch_dashboard(&self, path: &str) -> Result<Dashboard> {
        let mut dashboard: Dashboard = self.request(Method::GET, path, &[], None::<&()>).await?;
        dashboard.folder_id = dashboard.meta.folder;
        Ok(dashboard)
    }

    /// Delete a dashboard by slug
    #[deprecated(note = "starting from Grafana v5.0, use `delete_dashboard_by_uid` instead")]
    pub async fn delete_dashboard(&self, slug: &str) -> Result<()> {
        self.delete_dashboard_at(&format!("/api/dashboards/db/{slug}"))
            .await
    }

    /// Delete a dashboard by UID
    pub async fn delete_dashboard_by_uid(&self, uid: &str) -> Result<()> {
        self.delete_dashboard_at(&format!("/api/dashboards/uid/{uid}"))
            .await
    }

    async fn delete_dashboard_at(&self, path: &str) -> Result<()> {
        self.request_empty(Method::DELETE, path, &[], None::<&()>)
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

    const GET_DASHBOARD_JSON: &str = r#"{
        "meta": {
            "isStarred": false,
            "slug": "production-overview",
            "folderId": 5,
            "url": "/d/cIBgcSjkk/production-overview"
        },
        "dashboard": {
            "uid": "cIBgcSjkk",
            "title": "Production Overview",
            "panels": [{"id": 1, "type": "graph"}]
        }
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
    async fn test_dashboard_by_uid_copies_folder_from_meta() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/dashboards/uid/cIBgcSjkk"))
            .respond_with(ResponseTemplate::new(200).set_body_string(GET_DASHBOARD_JSON))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let dashboard = client.dashboard_by_uid("cIBgcSjkk").await.unwrap();

        assert_eq!(dashboard.meta.slug, "production-overview");
        assert_eq!(dashboard.folder_id, 5);
        assert_eq!(
            dashboard.model.get("title"),
            Some(&Value::String("Production Overview".to_string()))
        );
        // unknown model keys survive
        assert!(dashboard.model.contains_key("panels"));
    }

    #[tokio::test]
    async fn test_dashboard_by_slug_hits_db_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/dashboards/db/production-overview"))
            .respond_with(ResponseTemplate::new(200).set_body_string(GET_DASHBOARD_JSON))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        #[allow(deprecated)]
        let dashboard = client.dashboard("production-overview").await.unwrap();

        assert_eq!(dashboard.meta.folder, 5);
    }

    #[tokio::test]
    async fn test_new_dashboard() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/dashboards/db"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"slug":"test","id":42,"uid":"nErXDvCkzz","status":"success","version":1}"#,
            ))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let mut model = Map::new();
        model.insert("title".to_string(), Value::String("test".to_string()));

        let dashboard = Dashboard {
            model,
            overwrite: true,
            ..Dashboard::default()
        };
        let saved = client.new_dashboard(dashboard).await.unwrap();

        assert_eq!(saved.id, 42);
        assert_eq!(saved.uid, "nErXDvCkzz");
        assert_eq!(saved.status, "success");
    }

    #[tokio::test]
    async fn test_save_dashboard_wraps_model() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/dashboards/db"))
            .and(body_json(serde_json::json!({
                "dashboard": {"title": "wrapped"},
                "overwrite": false,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"slug":"wrapped","id":1,"uid":"u","status":"success","version":1}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let mut model = Map::new();
        model.insert("title".to_string(), Value::String("wrapped".to_string()));

        #[allow(deprecated)]
        let saved = client.save_dashboard(model, false).await.unwrap();
        assert_eq!(saved.id, 1);
    }

    #[tokio::test]
    async fn test_dashboards_by_ids_encodes_id_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("type", "dash-db"))
            .and(query_param("dashboardIds", "[1,5]"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let found = client.dashboards_by_ids(&[1, 5]).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_delete_dashboard_by_uid() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/dashboards/uid/cIBgcSjkk"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        assert!(client.delete_dashboard_by_uid("cIBgcSjkk").await.is_ok());
    }
}
