use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::GrafanaClient;
use crate::errors::Result;

/// A Grafana data source
///
/// `json_data` and `secure_json_data` are open maps whose keys depend on the
/// data source type; unknown keys round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub access: String,

    /// Only returned by the API; set through the `editable` attribute of
    /// provisioned data sources.
    #[serde(default)]
    pub read_only: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Deprecated upstream: use `secure_json_data`'s `password` key instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,
    #[serde(default)]
    pub is_default: bool,

    #[serde(default)]
    pub basic_auth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth_user: Option<String>,
    /// Deprecated upstream: use `secure_json_data`'s `basicAuthPassword` key instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth_password: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub json_data: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub secure_json_data: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct DataSourceIdResponse {
    id: i64,
}

impl GrafanaClient {
    /// Create a new data source and return its ID
    pub async fn new_data_source(&self, data_source: &DataSource) -> Result<i64> {
        let created: DataSourceIdResponse = self
            .request(Method::POST, "/api/datasources", &[], Some(data_source))
            .await?;
        Ok(created.id)
    }

    /// Update a data source, addressed by its ID
    pub async fn update_data_source(&self, data_source: &DataSource) -> Result<()> {
        let id = data_source.id.unwrap_or_default();
        self.request_empty(
            Method::PUT,
            &format!("/api/datasources/{id}"),
            &[],
            Some(data_source),
        )
        .await
    }

    /// Update a data source, addressed by its UID
    pub async fn update_data_source_by_uid(&self, data_source: &DataSource) -> Result<()> {
        let uid = data_source.uid.as_deref().unwrap_or_default();
        self.request_empty(
            Method::PUT,
            &format!("/api/datasources/uid/{uid}"),
            &[],
            Some(data_source),
        )
        .await
    }

    /// Fetch a data source by ID
    pub async fn data_source(&self, id: i64) -> Result<DataSource> {
        self.request(
            Method::GET,
            &format!("/api/datasources/{id}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Fetch a data source by UID
    pub async fn data_source_by_uid(&self, uid: &str) -> Result<DataSource> {
        self.request(
            Method::GET,
            &format!("/api/datasources/uid/{uid}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Look up a data source ID by name
    pub async fn data_source_id_by_name(&self, name: &str) -> Result<i64> {
        let found: DataSourceIdResponse = self
            .request(
                Method::GET,
                &format!("/api/datasources/id/{name}"),
                &[],
                None::<&()>,
            )
            .await?;
        Ok(found.id)
    }

    /// Fetch all data sources
    pub async fn data_sources(&self) -> Result<Vec<DataSource>> {
        self.request(Method::GET, "/api/datasources", &[], None::<&()>)
            .await
    }

    /// Delete a data source by ID
    pub async fn delete_data_source(&self, id: i64) -> Result<()> {
        self.request_empty(
            Method::DELETE,
            &format!("/api/datasources/{id}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Delete a data source by name
    pub async fn delete_data_source_by_name(&self, name: &str) -> Result<()> {
        self.request_empty(
            Method::DELETE,
            &format!("/api/datasources/name/{name}"),
            &[],
            None::<&()>,
        )
        .await
    }
}
