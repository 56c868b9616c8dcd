//! Provider-aware retry policy.
//!
//! Whispir sits behind the Mashery API gateway, which reports throttling
//! through the `X-Mashery-Error-Code` header on 403 responses. The policy's
//! job is to tell transient throttling apart from structural quota
//! exhaustion: a per-second limit is worth waiting out, a per-day limit has
//! a multi-hour cooldown that no retry budget survives.
//!
//! [`RetryPolicy`] is pure decision logic. State lives in a [`RetryState`]
//! scoped to a single logical call, so concurrent callers sharing one
//! transport never interfere with each other's retry bookkeeping.

use std::time::Duration;

use crate::clients::http_response::ApiResponse;

/// Status codes that may be retried after a server-supplied delay.
pub const RETRY_STATUS_CODES: [u16; 4] = [403, 413, 429, 503];

/// Mashery error code for a violated queries-per-day quota.
///
/// Daily quota resets are hours away; retrying is never useful.
pub const OVER_DAILY_QUOTA: &str = "ERR_403_DEVELOPER_OVER_QPD";

/// Fallback wait in seconds when `Retry-After` is absent or unparseable.
pub const RETRY_WAIT_TIME: u64 = 1;

/// What the transport should do with the response it just received.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RetryDecision {
    /// Stop retrying and hand the response on: a success to be returned, or
    /// a non-retryable failure to be classified.
    Proceed,
    /// Wait the given duration, then reissue the request.
    Wait(Duration),
    /// Stop immediately and classify the response as terminal, either
    /// because the budget is spent or because retrying cannot help.
    GiveUp,
}

/// Attempt bookkeeping for one logical call.
///
/// Created fresh per call; never attached to a client or collection.
#[derive(Debug, Default)]
pub struct RetryState {
    retries: u32,
}

impl RetryState {
    /// Creates state with zero retries consumed.
    #[must_use]
    pub const fn new() -> Self {
        Self { retries: 0 }
    }

    /// Returns the number of retries consumed so far.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }
}

/// Stateless retry decision engine.
///
/// The budget counts retries beyond the initial attempt: a budget of 1
/// allows two requests in total.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    max_retries: u32,
}

impl RetryPolicy {
    /// Creates a policy with the given retry budget.
    #[must_use]
    pub const fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Returns the retry budget.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Evaluates a response and decides how the call proceeds.
    pub fn evaluate(&self, state: &mut RetryState, response: &ApiResponse) -> RetryDecision {
        if !RETRY_STATUS_CODES.contains(&response.code) {
            return RetryDecision::Proceed;
        }

        if response.code == 403 {
            match response.mashery_error_code() {
                // Daily quota: cooldown is hours long, don't burn the budget.
                Some(OVER_DAILY_QUOTA) => return RetryDecision::GiveUp,
                // No gateway signal at all: a plain forbidden, not throttling.
                None => return RetryDecision::GiveUp,
                // Per-second quota (or another gateway throttle): retryable.
                Some(_) => {}
            }
        }

        if state.retries >= self.max_retries {
            return RetryDecision::GiveUp;
        }
        state.retries += 1;

        let delay = response
            .retry_after()
            .map_or(Duration::from_secs(RETRY_WAIT_TIME), Duration::from_secs_f64);
        RetryDecision::Wait(delay)
    }
}
