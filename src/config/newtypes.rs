//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use std::fmt;

/// The production Whispir API endpoint.
pub const WHISPIR_BASE_URL: &str = "https://api.whispir.com";

/// A validated Whispir username.
///
/// # Example
///
/// ```rust
/// use whispir_api::Username;
///
/// let username = Username::new("alice").unwrap();
/// assert_eq!(username.as_ref(), "alice");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Whispir password.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying `Password(*****)`
/// instead of the actual password, so it cannot leak through logs.
///
/// # Example
///
/// ```rust
/// use whispir_api::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

/// A validated Whispir API key.
///
/// The key is sent as the `apikey` query parameter on every request.
///
/// # Example
///
/// ```rust
/// use whispir_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API base URL.
///
/// Trailing slashes are trimmed so relative paths join cleanly.
///
/// # Example
///
/// ```rust
/// use whispir_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.whispir.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.whispir.com");
///
/// // The production endpoint is the default
/// assert_eq!(BaseUrl::default().as_ref(), "https://api.whispir.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not start with
    /// `http://` or `https://`, or has no host part.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim_end_matches('/').to_string();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() => Ok(Self(url)),
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(WHISPIR_BASE_URL.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_empty() {
        assert!(matches!(Username::new(""), Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_password_rejects_empty() {
        assert!(matches!(Password::new(""), Err(ConfigError::EmptyPassword)));
    }

    #[test]
    fn test_password_debug_is_masked() {
        let password = Password::new("super-secret").unwrap();
        let debug = format!("{password:?}");
        assert_eq!(debug, "Password(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_api_key_rejects_empty() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_round_trips() {
        let key = ApiKey::new("V4L1D4P1K3Y").unwrap();
        assert_eq!(key.as_ref(), "V4L1D4P1K3Y");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("https://api.whispir.com/").unwrap();
        assert_eq!(url.as_ref(), "https://api.whispir.com");
    }

    #[test]
    fn test_base_url_accepts_plain_http() {
        // Needed for local mock servers
        let url = BaseUrl::new("http://127.0.0.1:9999").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_base_url_rejects_other_schemes() {
        assert!(matches!(
            BaseUrl::new("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("api.whispir.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("https://"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_default_is_production() {
        assert_eq!(BaseUrl::default().as_ref(), WHISPIR_BASE_URL);
    }
}
