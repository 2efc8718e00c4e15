use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::errors::{GrafanaError, Result};

/// Credentials attached to every request
#[derive(Clone)]
pub enum Credentials {
    /// No authentication header is sent
    Anonymous,
    /// HTTP basic authentication
    Basic { username: String, password: String },
    /// Bearer token (Grafana API key or service account token)
    Token(String),
}

/// Client for the Grafana HTTP API
///
/// The client is an immutable configuration holder: base URL, credentials,
/// default headers and the HTTP transport. It is cheap to clone and safe to
/// share between tasks; every operation performs exactly one request.
///
/// # Example
///
/// ```rust,no_run
/// use grafana_api::{Credentials, GrafanaClient};
/// use url::Url;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = GrafanaClient::new(
///         Url::parse("http://localhost:3000")?,
///         Credentials::Token("eyJrIjoi...".to_string()),
///         Duration::from_secs(10),
///     )?;
///
///     let health = client.health().await?;
///     println!("Grafana version: {:?}", health.version);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct GrafanaClient {
    client: ClientWithMiddleware,
    base_url: Url,
    credentials: Credentials,
    default_headers: HeaderMap,
}

impl GrafanaClient {
    /// Create a new Grafana client
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the Grafana instance (e.g., `http://localhost:3000`)
    /// * `credentials` - Authentication attached to every request
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: Url, credentials: Credentials, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GrafanaError::BuildHttpClient)?;

        let client = ClientBuilder::new(client).build();

        Ok(Self {
            client,
            base_url,
            credentials,
            default_headers: HeaderMap::new(),
        })
    }

    /// Create a new client with a custom reqwest middleware client
    ///
    /// This allows you to add custom middleware (retry, logging, etc.)
    pub fn with_client(
        client: ClientWithMiddleware,
        base_url: Url,
        credentials: Credentials,
    ) -> Self {
        Self {
            client,
            base_url,
            credentials,
            default_headers: HeaderMap::new(),
        }
    }

    /// Attach a header to every request issued by this client
    ///
    /// Useful for `X-Grafana-Org-Id` or proxy headers.
    pub fn with_default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Get the base API URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform one request and decode the 2xx response body into `T`
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = encode_body(body)?;
        let body = self.dispatch(method, path, query, payload).await?;
        serde_json::from_str(&body).map_err(|source| GrafanaError::Decode { source, body })
    }

    /// Perform one request and discard the 2xx response body
    ///
    /// Used by deletes and updates whose response carries no payload.
    pub(crate) async fn request_empty<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let payload = encode_body(body)?;
        self.dispatch(method, path, query, payload).await?;
        Ok(())
    }

    /// One HTTP round trip: compose URL, attach auth and headers, send,
    /// map non-2xx statuses to `Api` errors, return the raw 2xx body.
    #[instrument(
        name = "GrafanaClient::dispatch",
        skip_all,
        fields(method = %method, path = path)
    )]
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        payload: Option<Vec<u8>>,
    ) -> Result<String> {
        let url = self
            .base_url
            .join(path)
            .map_err(|source| GrafanaError::InvalidPath {
                path: path.to_string(),
                source,
            })?;

        debug!(url = %url, "Sending request to Grafana");

        let mut request = self
            .client
            .request(method, url)
            .headers(self.default_headers.clone());

        request = match &self.credentials {
            Credentials::Anonymous => request,
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Credentials::Token(token) => request.bearer_auth(token),
        };

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(payload) = payload {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let response = request.send().await.map_err(GrafanaError::Transport)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| GrafanaError::Transport(err.into()))?;

        if !status.is_success() {
            return Err(GrafanaError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Request completed");
        Ok(body)
    }
}

fn encode_body<B>(body: Option<&B>) -> Result<Option<Vec<u8>>>
where
    B: Serialize + ?Sized,
{
    body.map(serde_json::to_vec)
        .transpose()
        .map_err(GrafanaError::Encode)
}
