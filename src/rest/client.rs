//! The top-level API client.

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::WhispirConfig;
use crate::rest::collection::Collection;
use crate::rest::kinds::ResourceKind;

/// Entry point to the Whispir REST API.
///
/// Holds one shared transport; the root collection accessors hand out
/// cheap scoped handles, so a single `Whispir` serves an entire program.
///
/// # Example
///
/// ```rust,ignore
/// use whispir_api::config::{ApiKey, Password, Username, WhispirConfig};
/// use whispir_api::rest::Whispir;
///
/// let config = WhispirConfig::builder()
///     .username(Username::new("alice")?)
///     .password(Password::new("hunter2")?)
///     .api_key(ApiKey::new("0123abcd")?)
///     .build()?;
/// let whispir = Whispir::new(&config);
///
/// let workspace = whispir.workspaces().show("ABC123").await?;
/// ```
#[derive(Clone, Debug)]
pub struct Whispir {
    http: Arc<HttpClient>,
    page_size: u32,
}

impl Whispir {
    /// Builds a client from a validated configuration.
    #[must_use]
    pub fn new(config: &WhispirConfig) -> Self {
        Self {
            http: Arc::new(HttpClient::new(config)),
            page_size: config.page_size(),
        }
    }

    /// A root collection of the given kind.
    ///
    /// The named accessors below cover the kinds the API exposes at its
    /// root; this is the generic form.
    #[must_use]
    pub fn collection(&self, kind: ResourceKind) -> Collection {
        Collection::root(Arc::clone(&self.http), kind, self.page_size)
    }

    /// Workspaces visible to the authenticated user.
    #[must_use]
    pub fn workspaces(&self) -> Collection {
        self.collection(ResourceKind::Workspace)
    }

    /// Messages in the default workspace.
    #[must_use]
    pub fn messages(&self) -> Collection {
        self.collection(ResourceKind::Message)
    }

    /// Templates in the default workspace.
    #[must_use]
    pub fn templates(&self) -> Collection {
        self.collection(ResourceKind::Template)
    }

    /// Response rules in the default workspace.
    #[must_use]
    pub fn response_rules(&self) -> Collection {
        self.collection(ResourceKind::ResponseRule)
    }

    /// Contacts in the default workspace.
    #[must_use]
    pub fn contacts(&self) -> Collection {
        self.collection(ResourceKind::Contact)
    }

    /// Apps registered against the account.
    #[must_use]
    pub fn apps(&self) -> Collection {
        self.collection(ResourceKind::App)
    }
}
