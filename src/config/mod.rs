//! Configuration types for the Whispir API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WhispirConfig`]: The main configuration struct holding all client settings
//! - [`WhispirConfigBuilder`]: A builder for constructing [`WhispirConfig`] instances
//! - [`Username`] / [`Password`] / [`ApiKey`]: Validated credential newtypes
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use whispir_api::{WhispirConfig, Username, Password, ApiKey};
//!
//! let config = WhispirConfig::builder()
//!     .username(Username::new("alice").unwrap())
//!     .password(Password::new("hunter2").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl, Password, Username, WHISPIR_BASE_URL};

use crate::error::ConfigError;

/// Default number of items requested per page during listing.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default retry budget: retries allowed beyond the initial attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Configuration for the Whispir API client.
///
/// Holds credentials, the API endpoint, and tuning knobs for paging and
/// retries.
///
/// # Thread Safety
///
/// `WhispirConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use whispir_api::{WhispirConfig, Username, Password, ApiKey, BaseUrl};
///
/// let config = WhispirConfig::builder()
///     .username(Username::new("alice").unwrap())
///     .password(Password::new("hunter2").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .base_url(BaseUrl::new("https://api.au.whispir.com").unwrap())
///     .page_size(50)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.page_size(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct WhispirConfig {
    username: Username,
    password: Password,
    api_key: ApiKey,
    base_url: BaseUrl,
    page_size: u32,
    max_retries: u32,
    user_agent_prefix: Option<String>,
}

// Verify WhispirConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WhispirConfig>();
};

impl WhispirConfig {
    /// Creates a new builder for constructing a `WhispirConfig`.
    #[must_use]
    pub fn builder() -> WhispirConfigBuilder {
        WhispirConfigBuilder::new()
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the page size used for paginated listings.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the retry budget (retries beyond the initial attempt).
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`WhispirConfig`] instances.
///
/// Required fields are `username`, `password`, and `api_key`. All other
/// fields have sensible defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api.whispir.com`
/// - `page_size`: 20
/// - `max_retries`: 10
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct WhispirConfigBuilder {
    username: Option<Username>,
    password: Option<Password>,
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    page_size: Option<u32>,
    max_retries: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl WhispirConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the username (required).
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the password (required).
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the page size used for paginated listings.
    #[must_use]
    pub const fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets the retry budget (retries allowed beyond the initial attempt).
    ///
    /// A budget of zero disables retries entirely.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets a user agent prefix prepended to the client's User-Agent.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WhispirConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `username`, `password`,
    /// or `api_key` are not set, and [`ConfigError::InvalidPageSize`] if the
    /// page size is zero.
    pub fn build(self) -> Result<WhispirConfig, ConfigError> {
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
        let password = self
            .password
            .ok_or(ConfigError::MissingRequiredField { field: "password" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }

        Ok(WhispirConfig {
            username,
            password,
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            page_size,
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
