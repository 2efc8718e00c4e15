use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::GrafanaClient;
use crate::errors::Result;

const TEMPLATES_PATH: &str = "/api/v1/provisioning/templates";

/// A reusable notification message template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub name: String,
    pub template: String,
}

#[derive(Serialize)]
struct SetTemplateRequest<'a> {
    template: &'a str,
}

impl GrafanaClient {
    /// Fetch all message templates
    pub async fn message_templates(&self) -> Result<Vec<MessageTemplate>> {
        self.request(Method::GET, TEMPLATES_PATH, &[], None::<&()>)
            .await
    }

    /// Fetch a message template by name
    pub async fn message_template(&self, name: &str) -> Result<MessageTemplate> {
        self.request(
            Method::GET,
            &format!("{TEMPLATES_PATH}/{name}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Create or update a message template
    pub async fn set_message_template(&self, name: &str, content: &str) -> Result<()> {
        let body = SetTemplateRequest { template: content };
        self.request_empty(
            Method::PUT,
            &format!("{TEMPLATES_PATH}/{name}"),
            &[],
            Some(&body),
        )
        .await
    }

    /// Delete a message template by name
    pub async fn delete_message_template(&self, name: &str) -> Result<()> {
        self.request_empty(
            Method::DELETE,
            &format!("{TEMPLATES_PATH}/{name}"),
            &[],
            None::<&()>,
        )
        .await
    }
}
