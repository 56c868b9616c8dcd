//! # Whispir API Rust Client
//!
//! A Rust client for the Whispir REST messaging API, providing type-safe
//! configuration, authenticated transport with retry handling, and a generic
//! resource layer over the API's nested collections.
//!
//! ## Overview
//!
//! This client provides:
//! - Type-safe configuration via [`WhispirConfig`] and [`WhispirConfigBuilder`]
//! - Validated newtypes for credentials and the base URL
//! - Async HTTP transport with Basic authentication, API key signing, and
//!   gateway-aware retry logic via [`clients::HttpClient`]
//! - A generic resource layer via [`Whispir`]: collections, schemaless
//!   containers, and lazy pagination over the API's listing endpoints
//!
//! ## Quick Start
//!
//! ```rust
//! use whispir_api::{ApiKey, Password, Username, Whispir, WhispirConfig};
//!
//! // Create configuration using the builder pattern
//! let config = WhispirConfig::builder()
//!     .username(Username::new("your-username").unwrap())
//!     .password(Password::new("your-password").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let whispir = Whispir::new(&config);
//! assert_eq!(whispir.workspaces().path(None), "workspaces");
//! ```
//!
//! ## Working with Resources
//!
//! Every operation goes through a collection. Root collections hang off the
//! client; nested collections hang off the containers they belong to:
//!
//! ```rust,ignore
//! use whispir_api::{ListOptions, Whispir};
//! use serde_json::json;
//!
//! // Send a message in a workspace
//! let workspace = whispir.workspaces().show("ABC123").await?;
//! let message = workspace
//!     .messages()
//!     .unwrap()
//!     .create(json!({
//!         "to": "+61400000000",
//!         "subject": "Deploy finished",
//!         "body": "All green."
//!     }))
//!     .await?;
//!
//! // Walk its delivery statuses page by page
//! let mut statuses = message.statuses().unwrap().list(ListOptions::default());
//! while let Some(status) = statuses.next().await {
//!     println!("{:?}", status?.get("status"));
//! }
//! ```
//!
//! ## Containers are Schemaless
//!
//! The API's resource schemas evolve server-side; containers carry whatever
//! fields the server returned, in order, and resolve their identity from an
//! explicit `id` field or the `rel="self"` link. Fields the client has never
//! heard of round-trip untouched.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Schema-agnostic**: Resources are ordered field maps, not structs

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{
    ApiKey, BaseUrl, Password, Username, WhispirConfig, WhispirConfigBuilder, WHISPIR_BASE_URL,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{ApiResponse, HttpClient, HttpMethod, HttpRequest, WhispirError};

// Re-export the resource layer
pub use rest::{Collection, Container, ContainerIter, ListOptions, ResourceKind, Whispir};
