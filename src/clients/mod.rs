//! HTTP transport layer for the Whispir API.
//!
//! This module contains the pieces every API call passes through:
//!
//! - [`HttpClient`]: authenticated, retried transport
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: request construction
//! - [`ApiResponse`]: raw response with provider-header accessors
//! - [`RetryPolicy`]: throttling-aware retry decisions
//! - [`WhispirError`]: the operation error taxonomy

pub mod errors;
pub mod http_client;
pub mod http_request;
pub mod http_response;
pub mod retry;

pub use errors::{InvalidRequestError, WhispirError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::ApiResponse;
pub use retry::{RetryDecision, RetryPolicy, RetryState, OVER_DAILY_QUOTA, RETRY_STATUS_CODES};
