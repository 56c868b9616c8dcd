//! Error types for Whispir API operations.
//!
//! The taxonomy mirrors what the server can actually do to a caller:
//!
//! - [`WhispirError::Client`]: terminal 4xx response (including quota aborts)
//! - [`WhispirError::Server`]: terminal 5xx response
//! - [`WhispirError::JsonDecode`]: 2xx response whose body is not valid JSON
//! - [`WhispirError::UnexpectedBody`]: 2xx response missing a required JSON object
//! - [`WhispirError::InvalidRequest`]: request rejected before sending
//! - [`WhispirError::Network`]: connection-level failure
//!
//! Every response-carrying variant exposes the raw [`ApiResponse`] so callers
//! can inspect status, headers, and body.
//!
//! # Example
//!
//! ```rust,ignore
//! match collection.show("ABC123").await {
//!     Ok(workspace) => println!("found {:?}", workspace.id()),
//!     Err(err) => {
//!         if let Some(response) = err.response() {
//!             eprintln!("HTTP {}: {}", response.code, response.body);
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

use crate::clients::http_response::ApiResponse;

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST or PUT request was built without a body.
    #[error("Cannot use {method} without specifying a body.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A request body was provided without a media type.
    #[error("Cannot set a body without also setting a media type.")]
    MissingMediaType,
}

/// Unified error type for Whispir API operations.
#[derive(Debug, Error)]
pub enum WhispirError {
    /// A terminal 4xx response, after any retries were spent or aborted.
    #[error("Whispir returned client error status {}", .0.code)]
    Client(ApiResponse),

    /// A terminal 5xx response, after any retries were spent.
    #[error("Whispir returned server error status {}", .0.code)]
    Server(ApiResponse),

    /// A 2xx response whose non-empty body failed to parse as JSON.
    #[error("Whispir response body is not valid JSON (status {})", .0.code)]
    JsonDecode(ApiResponse),

    /// A 2xx response carried no JSON object where one was required.
    #[error("expected a JSON object in the response body")]
    UnexpectedBody,

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl WhispirError {
    /// Classifies a terminal non-2xx response.
    ///
    /// 4xx maps to [`WhispirError::Client`], everything else to
    /// [`WhispirError::Server`]. Classification looks only at the terminal
    /// response's own status code.
    #[must_use]
    pub fn from_response(response: ApiResponse) -> Self {
        if (400..500).contains(&response.code) {
            Self::Client(response)
        } else {
            Self::Server(response)
        }
    }

    /// Returns the originating response, when the error carries one.
    #[must_use]
    pub const fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::Client(response) | Self::Server(response) | Self::JsonDecode(response) => {
                Some(response)
            }
            Self::UnexpectedBody | Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }

    /// Returns the HTTP status of the originating response, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|response| response.code)
    }
}
