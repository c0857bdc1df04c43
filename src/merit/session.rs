//! Organization session: access-token lifecycle and bearer-authenticated calls
//!
//! Every org- and member-scoped operation goes through [`OrgSession::get`] or
//! [`OrgSession::post`], which make sure a fresh org access token is in place
//! before the request is sent. Neither helper retries or fails on a non-200
//! status; the domain operations interpret the response themselves.

use chrono::{DateTime, Duration, Utc};
use log::{debug, error};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::api;
use crate::error::Result;
use crate::merit::client::{read_json_body, AppClient};
use crate::merit::clock::{Clock, SystemClock};

/// Empty query parameter list for GET calls without parameters
pub const NO_PARAMS: &[(&str, &str)] = &[];

/// Observable state of the org access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// No token has been obtained yet (or every refresh failed)
    NoToken,
    /// Token present and younger than the TTL
    Valid,
    /// Token present but at or past its TTL
    Stale,
}

/// Mutable token fields, only touched while the session lock is held
#[derive(Debug, Default)]
struct TokenState {
    access_token: Option<String>,
    issued_at: Option<DateTime<Utc>>,
}

impl TokenState {
    fn status(&self, now: DateTime<Utc>, ttl: Duration) -> TokenStatus {
        match (&self.access_token, self.issued_at) {
            (Some(_), Some(issued_at)) if now < issued_at + ttl => TokenStatus::Valid,
            (Some(_), Some(_)) => TokenStatus::Stale,
            _ => TokenStatus::NoToken,
        }
    }
}

/// Session bound to one organization
pub struct OrgSession {
    app: AppClient,
    org_id: String,
    ttl: Duration,
    max_pages: usize,
    clock: Arc<dyn Clock>,
    token: Mutex<TokenState>,
}

impl OrgSession {
    /// Open a session and fetch the first access token
    ///
    /// A failed token request is logged and leaves the session without a
    /// token; the next call retries the refresh.
    pub async fn new(app: AppClient, org_id: impl Into<String>) -> Self {
        Self::with_clock(app, org_id, Arc::new(SystemClock)).await
    }

    /// Open a session using a custom time source
    pub async fn with_clock(
        app: AppClient,
        org_id: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let session = Self {
            app,
            org_id: org_id.into(),
            ttl: Duration::seconds(api::ACCESS_TOKEN_TTL_SECS),
            max_pages: api::MAX_PAGES,
            clock,
            token: Mutex::new(TokenState::default()),
        };
        session.refresh_access_token().await;
        session
    }

    /// Override the page cap applied to listing operations
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// Application client the session authenticates with
    pub fn app(&self) -> &AppClient {
        &self.app
    }

    pub(crate) fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Current token status, evaluated against the session clock
    pub async fn token_status(&self) -> TokenStatus {
        self.token.lock().await.status(self.clock.now(), self.ttl)
    }

    /// Request a new org access token
    ///
    /// Returns whether the refresh succeeded. On failure the previous token
    /// state is kept.
    pub async fn refresh_access_token(&self) -> bool {
        let mut state = self.token.lock().await;
        self.refresh_locked(&mut state).await
    }

    async fn refresh_locked(&self, state: &mut TokenState) -> bool {
        match self.app.request_org_access_token(&self.org_id).await {
            Ok(Some(token)) => {
                debug!("Obtained access token for org '{}'", self.org_id);
                state.access_token = Some(token);
                state.issued_at = Some(self.clock.now());
                true
            }
            Ok(None) => {
                error!("Could not obtain access token for org '{}'", self.org_id);
                false
            }
            Err(e) => {
                error!(
                    "Access token request for org '{}' failed: {}",
                    self.org_id, e
                );
                false
            }
        }
    }

    /// Make sure a usable token is in place, refreshing when absent or stale
    ///
    /// Returns whatever token the session holds afterwards, which may still be
    /// stale or absent if the refresh failed.
    async fn authenticate(&self) -> Option<String> {
        let mut state = self.token.lock().await;
        match state.status(self.clock.now(), self.ttl) {
            TokenStatus::Valid => {}
            TokenStatus::NoToken => {
                debug!("No access token for org '{}', refreshing", self.org_id);
                self.refresh_locked(&mut state).await;
            }
            TokenStatus::Stale => {
                debug!("Access token for org '{}' expired, refreshing", self.org_id);
                self.refresh_locked(&mut state).await;
            }
        }
        state.access_token.clone()
    }

    /// Add the bearer token when there is one
    fn with_token(
        builder: reqwest::RequestBuilder,
        token: Option<String>,
    ) -> reqwest::RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Unified entry point for all GET calls
    ///
    /// `path` is appended to the base URL and needs a leading slash. The raw
    /// response is returned whatever its status.
    pub async fn get<Q>(&self, path: &str, params: &Q) -> Result<reqwest::Response>
    where
        Q: Serialize + ?Sized,
    {
        let token = self.authenticate().await;
        let url = self.app.url(path);
        debug!("Calling GET {}", url);

        let builder = self.app.http().get(&url).query(params);
        Ok(Self::with_token(builder, token).send().await?)
    }

    /// Unified entry point for all POST calls, with an optional JSON body
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<reqwest::Response> {
        let token = self.authenticate().await;
        let url = self.app.url(path);
        debug!("Calling POST {}", url);

        let mut builder = self.app.http().post(&url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Ok(Self::with_token(builder, token).send().await?)
    }

    /// GET and return the 200 JSON body, or `None` (logged) for anything else
    pub(crate) async fn get_json<Q>(
        &self,
        path: &str,
        params: &Q,
        context: &str,
    ) -> Result<Option<Value>>
    where
        Q: Serialize + ?Sized,
    {
        let response = self.get(path, params).await?;
        Ok(read_json_body(response, context).await)
    }

    /// POST and return the 200 JSON body, or `None` (logged) for anything else
    pub(crate) async fn post_json(
        &self,
        path: &str,
        body: Option<&Value>,
        context: &str,
    ) -> Result<Option<Value>> {
        let response = self.post(path, body).await?;
        Ok(read_json_body(response, context).await)
    }

    /// POST and report whether the API answered 200
    pub(crate) async fn post_ok(
        &self,
        path: &str,
        body: Option<&Value>,
        context: &str,
    ) -> Result<bool> {
        let response = self.post(path, body).await?;
        if response.status() == reqwest::StatusCode::OK {
            return Ok(true);
        }
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        error!("Failed to {} ({}): {}", context, status, text);
        Ok(false)
    }
}

impl fmt::Debug for OrgSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrgSession")
            .field("app", &self.app)
            .field("org_id", &self.org_id)
            .field("ttl", &self.ttl)
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::merit::clock::ManualClock;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ACCESS_PATH: &str = "/orgs/org-1/access";

    async fn mount_org_info(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/orgs/org-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "org-1",
                "title": "Millbrae CERT"
            })))
            .mount(server)
            .await;
    }

    #[test]
    fn test_token_state_status() {
        let now = Utc::now();
        let ttl = Duration::seconds(3600);

        let empty = TokenState::default();
        assert_eq!(empty.status(now, ttl), TokenStatus::NoToken);

        let fresh = TokenState {
            access_token: Some("t".to_string()),
            issued_at: Some(now),
        };
        assert_eq!(fresh.status(now, ttl), TokenStatus::Valid);
        assert_eq!(
            fresh.status(now + Duration::seconds(3599), ttl),
            TokenStatus::Valid
        );
        // Stale exactly at issued_at + ttl
        assert_eq!(
            fresh.status(now + Duration::seconds(3600), ttl),
            TokenStatus::Stale
        );
    }

    #[tokio::test]
    async fn test_construction_refreshes_once() {
        let mock_server = MockServer::start().await;
        let session = test_session(&mock_server).await;

        assert_eq!(request_count(&mock_server, ACCESS_PATH).await, 1);
        assert_eq!(session.token_status().await, TokenStatus::Valid);
    }

    #[tokio::test]
    async fn test_valid_token_is_reused() {
        let mock_server = MockServer::start().await;
        mount_org_info(&mock_server).await;
        let session = test_session(&mock_server).await;

        let response = session.get("/orgs/org-1", NO_PARAMS).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);

        assert_eq!(request_count(&mock_server, ACCESS_PATH).await, 1);
    }

    #[tokio::test]
    async fn test_stale_token_refreshes_once_before_request() {
        let mock_server = MockServer::start().await;
        mount_access_token(&mock_server).await;
        mount_org_info(&mock_server).await;

        let clock = Arc::new(ManualClock::new());
        let session = clocked_session(&mock_server, clock.clone()).await;
        assert_eq!(request_count(&mock_server, ACCESS_PATH).await, 1);

        clock.advance(Duration::seconds(api::ACCESS_TOKEN_TTL_SECS + 1));
        assert_eq!(session.token_status().await, TokenStatus::Stale);

        session.get("/orgs/org-1", NO_PARAMS).await.unwrap();
        assert_eq!(request_count(&mock_server, ACCESS_PATH).await, 2);
        assert_eq!(session.token_status().await, TokenStatus::Valid);

        // The refresh happened before the domain request
        let requests = mock_server.received_requests().await.unwrap();
        let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
        assert_eq!(paths, vec![ACCESS_PATH, ACCESS_PATH, "/orgs/org-1"]);
    }

    #[tokio::test]
    async fn test_failed_construction_leaves_no_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ACCESS_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&mock_server)
            .await;

        let session =
            OrgSession::new(AppClient::test_client(&mock_server.uri()), TEST_ORG).await;
        assert_eq!(session.token_status().await, TokenStatus::NoToken);
    }

    #[tokio::test]
    async fn test_no_token_retries_refresh_and_still_sends_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ACCESS_PATH))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/orgs/org-1"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let session =
            OrgSession::new(AppClient::test_client(&mock_server.uri()), TEST_ORG).await;
        let response = session.get("/orgs/org-1", NO_PARAMS).await.unwrap();

        assert_eq!(response.status().as_u16(), 401);
        assert_eq!(request_count(&mock_server, ACCESS_PATH).await, 2);

        let requests = mock_server.received_requests().await.unwrap();
        let api_request = requests
            .iter()
            .find(|r| r.url.path() == "/orgs/org-1")
            .unwrap();
        assert!(!api_request.headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ACCESS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"orgAccessToken": "old-token"})),
            )
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path(ACCESS_PATH))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/orgs/org-1"))
            .and(header("authorization", "Bearer old-token"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let clock = Arc::new(ManualClock::new());
        let session = clocked_session(&mock_server, clock.clone()).await;
        clock.advance(Duration::seconds(api::ACCESS_TOKEN_TTL_SECS + 1));

        let response = session.get("/orgs/org-1", NO_PARAMS).await.unwrap();
        assert_eq!(response.status().as_u16(), 401);
        assert_eq!(session.token_status().await, TokenStatus::Stale);
    }

    #[tokio::test]
    async fn test_get_sends_bearer_and_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/orgs/org-1/merits"))
            .and(header("authorization", "Bearer access-1"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server).await;
        let response = session
            .get("/orgs/org-1/merits", &[("limit", "10")])
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/merits/m-1/revoke"))
            .and(header("authorization", "Bearer access-1"))
            .and(body_json(serde_json::json!({"revocationReason": "typo"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server).await;
        let body = serde_json::json!({"revocationReason": "typo"});
        let response = session
            .post("/merits/m-1/revoke", Some(&body))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_non_200_is_returned_not_raised() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/fields/f-1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server).await;
        let response = session.get("/fields/f-1", NO_PARAMS).await;
        assert!(response.is_ok());
        assert_eq!(response.unwrap().status().as_u16(), 500);

        let json = session
            .get_json("/fields/f-1", NO_PARAMS, "fetch field")
            .await
            .unwrap();
        assert!(json.is_none());
    }

    #[tokio::test]
    async fn test_post_ok() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/merits/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/merits/bad"))
            .respond_with(ResponseTemplate::new(422).set_body_string("invalid"))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server).await;
        assert!(session.post_ok("/merits/ok", None, "edit").await.unwrap());
        assert!(!session.post_ok("/merits/bad", None, "edit").await.unwrap());
    }

    #[tokio::test]
    async fn test_with_max_pages_never_zero() {
        let mock_server = MockServer::start().await;
        let session = test_session(&mock_server).await.with_max_pages(0);
        assert_eq!(session.max_pages(), 1);
    }
}
