//! HTTP response types.
//!
//! [`ApiResponse`] is the client's view of one HTTP exchange: status code,
//! lowercased multi-valued headers, and the raw body text. The body is kept
//! unparsed because a failed JSON decode is meaningful in its own right —
//! `create()` recovers a resource identity from the `Location` header of
//! accepted-but-bodyless responses.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::WhispirError;

/// An HTTP response from the Whispir API.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl ApiResponse {
    /// Creates a new response from its parts.
    ///
    /// Header keys are expected to be lowercased already; the transport's
    /// header parsing takes care of that.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the named header, if present.
    ///
    /// Lookup is case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Seconds to wait before retrying, from the `Retry-After` header.
    #[must_use]
    pub fn retry_after(&self) -> Option<f64> {
        self.header("retry-after")
            .and_then(|value| value.parse::<f64>().ok())
    }

    /// The Mashery gateway error code, if the response carries one.
    ///
    /// Whispir fronts its API with Mashery; throttled requests come back
    /// with an `X-Mashery-Error-Code` header distinguishing per-second from
    /// per-day quota violations.
    #[must_use]
    pub fn mashery_error_code(&self) -> Option<&str> {
        self.header("x-mashery-error-code")
    }

    /// The `Location` header, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }

    /// Decodes the body as JSON.
    ///
    /// An empty body is a legitimate absent value, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`WhispirError::JsonDecode`] carrying a copy of this response
    /// when a non-empty body fails to parse.
    pub fn json(&self) -> Result<Option<Value>, WhispirError> {
        if self.body.is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&self.body)
            .map(Some)
            .map_err(|_| WhispirError::JsonDecode(self.clone()))
    }
}
