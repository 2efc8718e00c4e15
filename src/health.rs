use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::GrafanaClient;
use crate::errors::Result;

/// Response of the instance health endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl GrafanaClient {
    /// Check the health of the Grafana instance
    pub async fn health(&self) -> Result<HealthResponse> {
        self.request(Method::GET, "/api/health", &[], None::<&()>)
            .await
    }
}
