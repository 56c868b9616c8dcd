//! Request authentication.
//!
//! Whispir authenticates every request twice over: HTTP Basic credentials in
//! the `Authorization` header, plus the developer API key as an `apikey`
//! query parameter. [`Credentials`] owns both and decorates outgoing
//! requests, so retried attempts carry identical authentication.

use crate::config::{ApiKey, Password, Username, WhispirConfig};

/// Immutable authentication material for the Whispir API.
///
/// Owned by the transport; applied to every attempt, including retries.
///
/// # Example
///
/// ```rust
/// use whispir_api::{Credentials, Username, Password, ApiKey};
///
/// let credentials = Credentials::new(
///     Username::new("alice").unwrap(),
///     Password::new("hunter2").unwrap(),
///     ApiKey::new("key").unwrap(),
/// );
/// assert_eq!(credentials.api_key().as_ref(), "key");
/// ```
#[derive(Clone, Debug)]
pub struct Credentials {
    username: Username,
    password: Password,
    api_key: ApiKey,
}

impl Credentials {
    /// Creates credentials from their validated parts.
    #[must_use]
    pub const fn new(username: Username, password: Password, api_key: ApiKey) -> Self {
        Self {
            username,
            password,
            api_key,
        }
    }

    /// Extracts the credentials carried by a [`WhispirConfig`].
    #[must_use]
    pub fn from_config(config: &WhispirConfig) -> Self {
        Self::new(
            config.username().clone(),
            config.password().clone(),
            config.api_key().clone(),
        )
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Decorates a request with Basic auth and the `apikey` query parameter.
    pub(crate) fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .basic_auth(self.username.as_ref(), Some(self.password.as_ref()))
            .query(&[("apikey", self.api_key.as_ref())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new(
            Username::new("U53RN4M3").unwrap(),
            Password::new("P4ZZW0RD").unwrap(),
            ApiKey::new("V4L1D4P1K3Y").unwrap(),
        )
    }

    #[test]
    fn test_accessors() {
        let credentials = credentials();
        assert_eq!(credentials.username().as_ref(), "U53RN4M3");
        assert_eq!(credentials.api_key().as_ref(), "V4L1D4P1K3Y");
    }

    #[test]
    fn test_debug_masks_password() {
        let debug = format!("{:?}", credentials());
        assert!(!debug.contains("P4ZZW0RD"));
    }

    #[test]
    fn test_apply_sets_basic_auth_and_api_key() {
        let client = reqwest::Client::new();
        let request = credentials()
            .apply(client.get("https://api.whispir.com/workspaces"))
            .build()
            .unwrap();

        assert!(request.headers().contains_key("authorization"));
        let auth = request.headers()["authorization"].to_str().unwrap();
        assert!(auth.starts_with("Basic "));
        assert_eq!(
            request.url().query(),
            Some("apikey=V4L1D4P1K3Y"),
            "API key must ride along as a query parameter"
        );
    }
}
