//! GitHub REST API client implementation

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::header::{ACCEPT, HeaderMap};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, ListingApi, TeamApi};
use super::models::{Team, TeamMembership, User};
use super::pagination::PaginationParams;
use crate::config::DEFAULT_API_HOST;
use crate::error::{ApiError, ConfigError, Result};

/// Client-side pacing of outgoing requests
const RATE_LIMIT_PER_SECOND: NonZeroU32 = NonZeroU32::new(10).unwrap();

/// REST API version pinned in every request
const API_VERSION: &str = "2022-11-28";

/// Fallback wait when a rate-limited response carries no reset hint
const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// Admin login used for basic authentication.
///
/// The secret may be an account password or a personal access token.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    secret: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// GitHub API client.
///
/// One instance is built at login and shared by reference for the whole
/// session.
pub struct GitHubClient {
    http: HttpClient,
    base: Url,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    credentials: Credentials,
}

impl GitHubClient {
    /// Create a client for api.github.com
    #[cfg(test)]
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_host(credentials, None)
    }

    /// Create a client against a custom API host (GitHub Enterprise, tests)
    pub fn with_host(credentials: Credentials, api_host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("ghteams/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(
            RATE_LIMIT_PER_SECOND,
        )));

        let host = api_host
            .as_deref()
            .unwrap_or(DEFAULT_API_HOST)
            .trim_end_matches('/');
        let base = Url::parse(host).map_err(|e| {
            ConfigError::Invalid(format!("api_host '{}' is not a valid URL: {}", host, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(not_a_base(host).into());
        }

        Ok(Self {
            http,
            base,
            rate_limiter,
            credentials,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Append path segments to the base URL.
    ///
    /// Each segment is percent-encoded on its own, so a `/`, `?` or `#` in a
    /// login or org name stays inside that segment. Empty, `.` and `..`
    /// segments are rejected.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(ApiError::BadRequest(format!("invalid path segment '{}'", bad)).into());
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| not_a_base(self.base.as_str()))?
            .pop_if_empty()
            .extend(segments.iter().copied());
        Ok(url)
    }

    /// Build an authenticated request
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.secret))
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
    }

    /// Send a request and map non-success statuses to `ApiError`
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        let response = request.send().await.map_err(ApiError::from)?;
        debug!("{} {}", response.status().as_u16(), response.url().path());
        check_status(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(String, String)],
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        let response = self
            .send(self.request(Method::GET, url).query(query))
            .await?;

        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    /// Fetch every page of a list endpoint, preserving API order
    async fn get_all_pages<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>> {
        let mut params = PaginationParams::new();
        let mut items = Vec::new();

        loop {
            let page: Vec<T> = self.get_json(segments, &params.to_query()).await?;
            let received = page.len();
            items.extend(page);

            if params.is_last(received) {
                break;
            }
            params = params.next();
        }

        debug!("/{} -> {} items", segments.join("/"), items.len());
        Ok(items)
    }
}

fn not_a_base(host: &str) -> ConfigError {
    ConfigError::Invalid(format!("api_host '{}' cannot hold a path", host))
}

/// Turn an unsuccessful response into the matching `ApiError`
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let err = match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN if rate_limit_exhausted(response.headers()) => {
            ApiError::RateLimit(rate_limit_wait(response.headers()))
        }
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(rate_limit_wait(response.headers())),
        StatusCode::NOT_FOUND => {
            ApiError::NotFound(error_message(response, "Resource not found").await)
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(error_message(response, "Bad request").await)
        }
        status if status.is_server_error() => {
            let fallback = format!("Server error: {}", status);
            ApiError::ServerError(error_message(response, &fallback).await)
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    };

    Err(err.into())
}

/// GitHub reports an exhausted quota as 403 with `x-ratelimit-remaining: 0`
fn rate_limit_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

fn rate_limit_wait(headers: &HeaderMap) -> Duration {
    let header_u64 = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
    };

    if let Some(secs) = header_u64("retry-after") {
        return Duration::from_secs(secs);
    }

    match header_u64("x-ratelimit-reset") {
        Some(reset) => {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            Duration::from_secs(reset.saturating_sub(now))
        }
        None => DEFAULT_RATE_LIMIT_WAIT,
    }
}

/// Extract GitHub's `{"message": ...}` from an error body
async fn error_message(response: Response, fallback: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match response.text().await {
        Ok(body) => match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) if body.trim().is_empty() => fallback.to_string(),
            Err(_) => body,
        },
        Err(_) => fallback.to_string(),
    }
}

#[async_trait]
impl AuthApi for GitHubClient {
    async fn current_user(&self) -> Result<User> {
        self.get_json(&["user"], &[]).await
    }
}

#[async_trait]
impl ListingApi for GitHubClient {
    async fn get_user(&self, login: &str) -> Result<User> {
        self.get_json(&["users", login], &[]).await
    }

    async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        let mut teams: Vec<Team> = self.get_all_pages(&["orgs", org, "teams"]).await?;
        for team in &mut teams {
            team.organization = org.to_string();
        }
        Ok(teams)
    }

    async fn list_team_members(&self, team_id: u64) -> Result<Vec<User>> {
        self.get_all_pages(&["teams", &team_id.to_string(), "members"])
            .await
    }
}

#[async_trait]
impl TeamApi for GitHubClient {
    async fn add_team_member(&self, team_id: u64, login: &str) -> Result<bool> {
        let url = self.endpoint(&["teams", &team_id.to_string(), "memberships", login])?;
        let response = self.send(self.request(Method::PUT, url)).await?;

        // A pending membership still counts: GitHub has sent the org invite.
        match response.json::<TeamMembership>().await {
            Ok(membership) => debug!("membership of {} in team {}: {}", login, team_id, membership.state),
            Err(e) => debug!("membership response for {} not parsed: {}", login, e),
        }
        Ok(true)
    }

    async fn remove_team_member(&self, team_id: u64, login: &str) -> Result<bool> {
        let url = self.endpoint(&["teams", &team_id.to_string(), "memberships", login])?;
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(true)
    }
}
