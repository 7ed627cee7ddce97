//! HTTP client for the SpendZen backend API.
//!
//! The backend is a plain JSON API. Every call either yields the typed record
//! nested in the response or one of the [`RemoteError`] variants; nothing is
//! retried.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use spendzen_core::config::AppConfig;
use spendzen_core::errors::{Error, RemoteError, Result};
use spendzen_core::goals::{GoalData, NewGoal};
use spendzen_core::users::{SaveUserPayload, UserData, UserStatus};

const OP_SAVE_USER: &str = "save user";
const OP_FETCH_USER: &str = "fetch user";
const OP_CHECK_STATUS: &str = "check user status";
const OP_SAVE_GOAL: &str = "save goal";

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types (internal, for unwrapping the nested payloads)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    #[serde(default)]
    user: Option<UserData>,
}

#[derive(Debug, Deserialize)]
struct GoalEnvelope {
    #[serde(default)]
    goal: Option<GoalData>,
}

/// Whether a rejected response's body is surfaced in the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorBody {
    Include,
    Omit,
}

// ─────────────────────────────────────────────────────────────────────────────
// Backend API
// ─────────────────────────────────────────────────────────────────────────────

/// Contract of the backend endpoints the client depends on.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// `POST /user/save`
    async fn save_user(&self, payload: &SaveUserPayload) -> Result<UserData>;

    /// `GET /user/get?clerkId=<id>`
    async fn get_user(&self, clerk_id: &str) -> Result<UserData>;

    /// `GET /user/status?clerkId=<id>`
    async fn get_user_status(&self, clerk_id: &str) -> Result<UserStatus>;

    /// `POST /goal/save`
    async fn save_goal(&self, goal: &NewGoal) -> Result<GoalData>;
}

/// reqwest-backed implementation of [`BackendApi`].
///
/// # Example
///
/// ```ignore
/// let client = BackendApiClient::new("http://localhost:8080", None)?;
/// let user = client.get_user("user_2abc").await?;
/// ```
#[derive(Debug, Clone)]
pub struct BackendApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendApiClient {
    /// Create a new backend client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Scheme and host of the backend (e.g. "https://api.example.com")
    /// * `timeout` - Per-request timeout; `None` keeps the transport default
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().default_headers(Self::headers());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for the backend URL resolved from `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.backend_url(), config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn lookup_url(&self, path: &str, clerk_id: &str) -> String {
        format!(
            "{}{}?clerkId={}",
            self.base_url,
            path,
            urlencoding::encode(clerk_id)
        )
    }

    async fn get<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: &str,
        error_body: ErrorBody,
    ) -> Result<T> {
        debug!("[Backend] GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;

        parse_response(operation, response, error_body).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Backend] POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;

        parse_response(operation, response, ErrorBody::Include).await
    }
}

fn transport_error(operation: &str, err: reqwest::Error) -> Error {
    warn!("[Backend] Failed to {}: {}", operation, err);
    RemoteError::Transport {
        operation: operation.to_string(),
        message: err.to_string(),
    }
    .into()
}

fn malformed(operation: &str, message: String) -> Error {
    RemoteError::MalformedResponse {
        operation: operation.to_string(),
        message,
    }
    .into()
}

/// Check the status, then parse the body as `T`.
async fn parse_response<T: DeserializeOwned>(
    operation: &str,
    response: reqwest::Response,
    error_body: ErrorBody,
) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(operation, e))?;

    if !status.is_success() {
        warn!("[Backend] Failed to {} ({}): {}", operation, status, body);
        return Err(RemoteError::Request {
            operation: operation.to_string(),
            status: status.as_u16(),
            body: (error_body == ErrorBody::Include).then_some(body),
        }
        .into());
    }

    serde_json::from_str(&body).map_err(|e| malformed(operation, e.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// BackendApi Trait Implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl BackendApi for BackendApiClient {
    async fn save_user(&self, payload: &SaveUserPayload) -> Result<UserData> {
        let envelope: UserEnvelope = self.post(OP_SAVE_USER, "/user/save", payload).await?;
        envelope
            .user
            .ok_or_else(|| malformed(OP_SAVE_USER, "response has no `user` field".to_string()))
    }

    async fn get_user(&self, clerk_id: &str) -> Result<UserData> {
        let url = self.lookup_url("/user/get", clerk_id);
        let envelope: UserEnvelope = self.get(OP_FETCH_USER, &url, ErrorBody::Include).await?;
        envelope
            .user
            .ok_or_else(|| malformed(OP_FETCH_USER, "response has no `user` field".to_string()))
    }

    async fn get_user_status(&self, clerk_id: &str) -> Result<UserStatus> {
        let url = self.lookup_url("/user/status", clerk_id);
        self.get(OP_CHECK_STATUS, &url, ErrorBody::Omit).await
    }

    async fn save_goal(&self, goal: &NewGoal) -> Result<GoalData> {
        let envelope: GoalEnvelope = self.post(OP_SAVE_GOAL, "/goal/save", goal).await?;
        envelope
            .goal
            .ok_or_else(|| malformed(OP_SAVE_GOAL, "response has no `goal` field".to_string()))
    }
}
