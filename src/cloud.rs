use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::GrafanaClient;
use crate::errors::Result;

/// Request body for creating a Grafana Cloud API key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCloudApiKeyInput {
    pub name: String,
    pub role: String,
}

/// A Grafana Cloud API key
///
/// The cloud endpoint uses capitalized JSON keys, unlike the rest of the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudApiKey {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Token", default)]
    pub token: String,
    #[serde(rename = "Expiration", default)]
    pub expiration: String,
}

/// Listing envelope returned by the cloud API key endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListCloudApiKeysOutput {
    #[serde(rename = "Items", default)]
    pub items: Vec<CloudApiKey>,
}

impl GrafanaClient {
    /// Create an API key in the given cloud organization
    pub async fn create_cloud_api_key(
        &self,
        org: &str,
        input: &CreateCloudApiKeyInput,
    ) -> Result<CloudApiKey> {
        self.request(
            Method::POST,
            &format!("/api/orgs/{org}/api-keys"),
            &[],
            Some(input),
        )
        .await
    }

    /// List the API keys of the given cloud organization
    pub async fn list_cloud_api_keys(&self, org: &str) -> Result<ListCloudApiKeysOutput> {
        self.request(
            Method::GET,
            &format!("/api/orgs/{org}/api-keys"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Delete a cloud API key by name
    pub async fn delete_cloud_api_key(&self, org: &str, key_name: &str) -> Result<()> {
        self.request_empty(
            Method::DELETE,
            &format!("/api/orgs/{org}/api-keys/{key_name}"),
            &[],
            None::<&()>,
        )
        .await
    }
}
