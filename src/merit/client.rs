//! Application-level Merit client (HTTP Basic authenticated calls)

use chrono::Utc;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;

use crate::config::api;
use crate::error::Result;
use crate::merit::credentials::CredentialResolver;

/// Merit API environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    /// Pick the environment from a sandbox flag
    pub fn from_sandbox(sandbox: bool) -> Self {
        if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// Base URL of the environment, without trailing slash
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => api::PRODUCTION_URL,
            Environment::Sandbox => api::SANDBOX_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// Merit API client holding the application credentials
#[derive(Clone)]
pub struct AppClient {
    client: Client,
    app_id: String,
    app_secret: String,
    environment: Environment,
    /// Custom base URL override (mock servers, proxies)
    base_url_override: Option<String>,
}

impl AppClient {
    /// Create a new client for the given environment
    pub fn new(app_id: String, app_secret: String, environment: Environment) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            app_id,
            app_secret,
            environment,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for mock servers or proxies)
    pub fn with_base_url(app_id: String, app_secret: String, base_url: String) -> Self {
        let mut client = Self::new(app_id, app_secret, Environment::Production);
        client.base_url_override = Some(base_url.trim_end_matches('/').to_string());
        client
    }

    /// Create a client from `MERIT_APP_ID`, `MERIT_APP_SECRET` and `MERIT_SANDBOX`
    pub fn from_env() -> Result<Self> {
        let resolver = CredentialResolver::new();
        let app_id = resolver.app_id(None)?;
        let app_secret = resolver.app_secret(None)?;
        Ok(Self::new(
            app_id,
            app_secret,
            Environment::from_sandbox(resolver.sandbox(false)),
        ))
    }

    /// Build the base URL for API requests
    pub fn base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Underlying HTTP client (shared with org sessions)
    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// Build a full URL from an API path with a leading slash
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Create a Basic-authenticated GET request builder
    fn basic_get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.app_id, Some(&self.app_secret))
    }

    /// Create a Basic-authenticated POST request builder
    fn basic_post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .basic_auth(&self.app_id, Some(&self.app_secret))
    }

    /// Request a URL the org admin visits to link their org to this app
    ///
    /// Returns `None` when the API does not answer with a link URL.
    pub async fn request_link_url(
        &self,
        success_url: &str,
        failure_url: &str,
    ) -> Result<Option<String>> {
        let url = self.url("/request_linkapp_url");
        let body = json!({
            "requestedPermissions": [{ "permissionType": "CanManageOrg" }],
            "successUrl": success_url,
            "failureUrl": failure_url,
            "state": state_token("initiated-from-merit-registration"),
        });

        debug!("Requesting link app URL from: {}", url);

        let response = self.basic_post(&url).json(&body).send().await?;
        Ok(read_json_body(response, "request link app URL")
            .await
            .and_then(|body| string_field(&body, "request_linkapp_url")))
    }

    /// Exchange the org ID token returned by the link flow for the durable org ID
    pub async fn exchange_org_token(&self, org_id_token: &str) -> Result<Option<String>> {
        let url = self.url("/org_id");
        debug!("Exchanging org ID token at: {}", url);

        let response = self
            .basic_get(&url)
            .query(&[("org_id_token", org_id_token)])
            .send()
            .await?;

        Ok(read_json_body(response, "exchange org ID token")
            .await
            .and_then(|body| string_field(&body, "orgId")))
    }

    /// Request a short-lived org access token
    pub async fn request_org_access_token(&self, org_id: &str) -> Result<Option<String>> {
        let url = self.url(&format!("/orgs/{}/access", org_id));
        debug!("Requesting org access token from: {}", url);

        let response = self.basic_post(&url).send().await?;
        Ok(read_json_body(response, "fetch org access token")
            .await
            .and_then(|body| string_field(&body, "orgAccessToken")))
    }
}

impl fmt::Debug for AppClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppClient")
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .field("base_url", &self.base_url())
            .finish()
    }
}

/// Opaque correlation string sent as `state`, stamped with the current time
pub(crate) fn state_token(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().format("%d-%m-%Y-%H-%M-%S"))
}

/// Read a 200 JSON body, logging anything else
///
/// Non-200 responses and unparsable bodies are logged with their status and
/// body text and yield `None`.
pub(crate) async fn read_json_body(response: reqwest::Response, context: &str) -> Option<Value> {
    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        error!("Failed to {} ({}): {}", context, status.as_u16(), body);
        return None;
    }

    match response.json::<Value>().await {
        Ok(body) => Some(body),
        Err(e) => {
            error!("Failed to parse response to {}: {}", context, e);
            None
        }
    }
}

/// Extract a string field from a JSON object, logging when it is missing
pub(crate) fn string_field(body: &Value, field: &str) -> Option<String> {
    match body.get(field).and_then(Value::as_str) {
        Some(value) => Some(value.to_string()),
        None => {
            error!("Response has no '{}' field: {}", field, body);
            None
        }
    }
}

/// Deserialize a JSON body into a model, logging when it does not fit
pub(crate) fn parse_body<T: DeserializeOwned>(body: Value, context: &str) -> Option<T> {
    match serde_json::from_value(body) {
        Ok(model) => Some(model),
        Err(e) => {
            error!("Failed to parse {}: {}", context, e);
            None
        }
    }
}

#[cfg(test)]
impl AppClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-app".to_string(),
            "test-secret".to_string(),
            base_url.to_string(),
        )
    }
}
