use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use fh_core::SecretString;

pub type SupabaseResult<T> = Result<T, SupabaseError>;

/// Connection settings for one Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    /// Where the provider sends the browser after email confirmation or
    /// federated sign-in.
    pub redirect_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SupabaseError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SupabaseError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SupabaseError::Timeout
        } else if error.is_decode() {
            SupabaseError::Decode(error.to_string())
        } else {
            SupabaseError::Network(error.to_string())
        }
    }
}

/// Error payload shapes used by GoTrue and PostgREST.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
    }
}

/// Thin HTTP client for a Supabase project: base URL, `apikey` header and
/// status handling shared by the auth and data adapters.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> SupabaseResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SupabaseError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get(&self, path: &str, token: Option<&SecretString>) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)), token)
    }

    pub fn post(&self, path: &str, token: Option<&SecretString>) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)), token)
    }

    /// Every request carries the project key; the bearer is the user's
    /// access token when signed in and the project key otherwise.
    fn authorize(&self, request: RequestBuilder, token: Option<&SecretString>) -> RequestBuilder {
        let bearer = token.map(|t| t.expose()).unwrap_or(self.anon_key.as_str());
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }

    /// Sends `request` and decodes a successful JSON body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> SupabaseResult<T> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| SupabaseError::Decode(e.to_string()))
    }

    /// Sends `request`, turning non-success statuses into
    /// [`SupabaseError::Status`] with the server's message.
    pub async fn send(&self, request: RequestBuilder) -> SupabaseResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| fallback_message(status, &body));
        Err(SupabaseError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string()
    } else {
        body.trim().to_string()
    }
}
