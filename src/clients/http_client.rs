//! HTTP transport for Whispir API communication.
//!
//! This module provides the [`HttpClient`] type: it owns the base URL and
//! User-Agent, decorates every attempt with authentication, drives the
//! retry loop, and classifies terminal failures.

use std::collections::HashMap;

use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::errors::WhispirError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::ApiResponse;
use crate::clients::retry::{RetryDecision, RetryPolicy, RetryState, OVER_DAILY_QUOTA};
use crate::config::WhispirConfig;

/// Client version from Cargo.toml, embedded in the User-Agent.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making authenticated, retried requests to the Whispir API.
///
/// The client handles:
/// - URL resolution against the configured base URL
/// - Basic auth and `apikey` decoration on every attempt, retries included
/// - A fixed User-Agent embedding the client version
/// - Provider-aware retry handling via [`RetryPolicy`]
/// - Terminal error classification
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async
/// tasks. Retry state is scoped per call, so sharing never entangles
/// concurrent callers.
///
/// # Example
///
/// ```rust,ignore
/// use whispir_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&config);
/// let request = HttpRequest::builder(HttpMethod::Get, "workspaces")
///     .build()
///     .unwrap();
/// let body = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL without a trailing slash (e.g., `https://api.whispir.com`).
    base_url: String,
    /// Authentication material applied to every attempt.
    credentials: Credentials,
    /// Fixed User-Agent sent with every request.
    user_agent: String,
    /// Retry decision engine shared by all calls.
    retry: RetryPolicy,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &WhispirConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}whispir-api/{CLIENT_VERSION}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            credentials: Credentials::from_config(config),
            user_agent,
            retry: RetryPolicy::new(config.max_retries()),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sends a request and returns the decoded JSON body.
    ///
    /// An empty 2xx body yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`WhispirError::JsonDecode`] when a non-empty 2xx body fails
    /// to parse, and everything [`send`](Self::send) can return.
    pub async fn request(&self, request: HttpRequest) -> Result<Option<Value>, WhispirError> {
        let response = self.send(request).await?;
        response.json()
    }

    /// Sends a request and returns the raw 2xx response.
    ///
    /// Each attempt is authenticated identically; retryable responses are
    /// reissued after the server-supplied delay until the retry budget runs
    /// out or the policy aborts.
    ///
    /// # Errors
    ///
    /// Returns [`WhispirError::InvalidRequest`] if validation fails,
    /// [`WhispirError::Network`] on connection failure, and
    /// [`WhispirError::Client`] / [`WhispirError::Server`] for terminal
    /// non-2xx responses.
    pub async fn send(&self, request: HttpRequest) -> Result<ApiResponse, WhispirError> {
        request.verify().map_err(WhispirError::InvalidRequest)?;

        let url = self.endpoint(&request.path);
        let mut state = RetryState::new();

        loop {
            tracing::debug!(method = %request.http_method, %url, "issuing request");
            let response = self.attempt(&request, &url).await?;

            match self.retry.evaluate(&mut state, &response) {
                RetryDecision::Proceed => {
                    if response.is_ok() {
                        return Ok(response);
                    }
                    return Err(WhispirError::from_response(response));
                }
                RetryDecision::Wait(delay) => {
                    tracing::warn!(
                        status = response.code,
                        retry = state.retries(),
                        delay_secs = delay.as_secs_f64(),
                        "throttled by Whispir, waiting before reissuing"
                    );
                    tokio::time::sleep(delay).await;
                }
                RetryDecision::GiveUp => {
                    if response.mashery_error_code() == Some(OVER_DAILY_QUOTA) {
                        tracing::warn!("daily request quota exhausted, not retrying");
                    }
                    return Err(WhispirError::from_response(response));
                }
            }
        }
    }

    /// Issues one attempt and collects the response.
    async fn attempt(
        &self,
        request: &HttpRequest,
        url: &str,
    ) -> Result<ApiResponse, WhispirError> {
        let mut builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        builder = self.credentials.apply(builder);
        builder = builder.header("User-Agent", &self.user_agent);

        if let Some(media_type) = &request.media_type {
            builder = builder
                .header("Content-Type", media_type)
                .header("Accept", media_type);
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await.unwrap_or_default();

        Ok(ApiResponse::new(code, headers, body))
    }

    /// Resolves a relative path against the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Parses response headers into a lowercased multi-valued map.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, BaseUrl, Password, Username};

    fn create_test_config() -> WhispirConfig {
        WhispirConfig::builder()
            .username(Username::new("alice").unwrap())
            .password(Password::new("hunter2").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_configured_base_url() {
        let config = WhispirConfig::builder()
            .username(Username::new("alice").unwrap())
            .password(Password::new("hunter2").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("https://api.au.whispir.com").unwrap())
            .build()
            .unwrap();

        let client = HttpClient::new(&config);
        assert_eq!(client.base_url(), "https://api.au.whispir.com");
    }

    #[test]
    fn test_user_agent_embeds_client_version() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(client.user_agent(), format!("whispir-api/{CLIENT_VERSION}"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = WhispirConfig::builder()
            .username(Username::new("alice").unwrap())
            .password(Password::new("hunter2").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config);
        assert!(client.user_agent().starts_with("MyApp/1.0 | "));
        assert!(client.user_agent().contains("whispir-api/"));
    }

    #[test]
    fn test_endpoint_resolution() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.endpoint("workspaces"),
            "https://api.whispir.com/workspaces"
        );
        assert_eq!(
            client.endpoint("/workspaces/W1/messages"),
            "https://api.whispir.com/workspaces/W1/messages"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
