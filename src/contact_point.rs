use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::GrafanaClient;
use crate::errors::{GrafanaError, Result};

const CONTACT_POINTS_PATH: &str = "/api/v1/provisioning/contact-points";

/// A Grafana Alerting contact point
///
/// `settings` is an open map whose keys depend on the integration type
/// (slack, email, pagerduty, ...); unknown keys round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(default)]
    pub uid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(default)]
    pub disable_resolve_message: bool,
    #[serde(default)]
    pub provenance: String,
}

impl GrafanaClient {
    /// Fetch all contact points
    pub async fn contact_points(&self) -> Result<Vec<ContactPoint>> {
        self.request(Method::GET, CONTACT_POINTS_PATH, &[], None::<&()>)
            .await
    }

    /// Fetch the contact points with the given name
    pub async fn contact_points_by_name(&self, name: &str) -> Result<Vec<ContactPoint>> {
        let params = [("name", name.to_string())];
        self.request(Method::GET, CONTACT_POINTS_PATH, &params, None::<&()>)
            .await
    }

    /// Fetch a single contact point by UID
    ///
    /// The provisioning API has no per-UID get, so this scans the listing.
    pub async fn contact_point(&self, uid: &str) -> Result<ContactPoint> {
        let points = self.contact_points().await?;
        points
            .into_iter()
            .find(|p| p.uid == uid)
            .ok_or_else(|| GrafanaError::ContactPointNotFound {
                uid: uid.to_string(),
            })
    }

    /// Create a contact point and return its UID
    pub async fn new_contact_point(&self, point: &ContactPoint) -> Result<String> {
        let created: ContactPoint = self
            .request(Method::POST, CONTACT_POINTS_PATH, &[], Some(point))
            .await?;
        Ok(created.uid)
    }

    /// Replace a contact point, addressed by its UID
    pub async fn update_contact_point(&self, point: &ContactPoint) -> Result<()> {
        self.request_empty(
            Method::PUT,
            &format!("{CONTACT_POINTS_PATH}/{}", point.uid),
            &[],
            Some(point),
        )
        .await
    }

    /// Delete a contact point by UID
    pub async fn delete_contact_point(&self, uid: &str) -> Result<()> {
        self.request_empty(
            Method::DELETE,
            &format!("{CONTACT_POINTS_PATH}/{uid}"),
            &[],
            None::<&()>,
        )
        .await
    }
}
