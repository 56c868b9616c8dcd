//! Resource collections.
//!
//! A [`Collection`] addresses one resource kind at one scope — either the
//! API root (`workspaces`) or nested beneath a parent instance
//! (`workspaces/W1/messages`). It carries no caller-visible state beyond
//! that scope, so cloning one is cheap and every operation maps directly
//! to a request.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::{HttpClient, HttpMethod, HttpRequest, WhispirError};
use crate::rest::container::{id_from_uri, Container};
use crate::rest::kinds::{ResourceDescriptor, ResourceKind};
use crate::rest::pagination::{ContainerIter, PaginationStrategy};

/// Listing parameters.
///
/// By default a listing traverses every page of the collection. Setting
/// `offset` or `limit` pins a single explicit page instead; the cursor
/// then yields only that window's items.
#[derive(Clone, Debug, Default)]
pub struct ListOptions {
    offset: Option<u32>,
    limit: Option<u32>,
    filters: HashMap<String, String>,
}

impl ListOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the starting offset of an explicit window.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Pins the size of an explicit window.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Adds a server-side filter parameter, passed through verbatim.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }
}

/// All instances of one resource kind at one scope.
#[derive(Clone, Debug)]
pub struct Collection {
    http: Arc<HttpClient>,
    descriptor: &'static ResourceDescriptor,
    parent_path: Option<String>,
    page_size: u32,
}

impl Collection {
    /// A collection at the API root.
    pub(crate) fn root(http: Arc<HttpClient>, kind: ResourceKind, page_size: u32) -> Self {
        Self {
            http,
            descriptor: kind.descriptor(),
            parent_path: None,
            page_size,
        }
    }

    /// A collection nested beneath a parent instance's path.
    pub(crate) fn child_collection(&self, kind: ResourceKind, parent_path: String) -> Self {
        Self {
            http: Arc::clone(&self.http),
            descriptor: kind.descriptor(),
            parent_path: Some(parent_path),
            page_size: self.page_size,
        }
    }

    /// Returns the kind of resource this collection addresses.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.descriptor.kind
    }

    pub(crate) const fn strategy(&self) -> PaginationStrategy {
        self.descriptor.pagination
    }

    pub(crate) const fn list_key(&self) -> &'static str {
        self.descriptor.list_key
    }

    pub(crate) const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the network path of the collection, or of one instance when
    /// an identity is given.
    #[must_use]
    pub fn path(&self, id: Option<&str>) -> String {
        let base = match &self.parent_path {
            Some(parent) => format!("{parent}/{}", self.descriptor.segment),
            None => self.descriptor.segment.to_string(),
        };
        match id {
            Some(id) => format!("{base}/{id}"),
            None => base,
        }
    }

    /// Wraps decoded fields in a container scoped to this collection.
    pub(crate) fn containerize(&self, fields: Map<String, Value>) -> Container {
        Container::new(self.clone(), fields)
    }

    /// Builds an identity-only container, issuing no request.
    #[must_use]
    pub fn instance(&self, id: impl Into<String>) -> Container {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(id.into()));
        self.containerize(fields)
    }

    /// Creates an instance from the given representation.
    ///
    /// The server acknowledges some creations with `202 Accepted`, an empty
    /// body and a `Location` header naming the new instance; those come
    /// back as identity-only containers. A `2xx` body that is neither a
    /// JSON object nor recoverable from `Location` is an error.
    pub async fn create(&self, body: Value) -> Result<Container, WhispirError> {
        let request = HttpRequest::builder(HttpMethod::Post, self.path(None))
            .body(body)
            .media_type(self.descriptor.media_type)
            .build()?;
        let response = self.http.send(request).await?;

        let recovered = response.location().and_then(id_from_uri);
        match response.json() {
            Ok(Some(Value::Object(fields))) => Ok(self.containerize(fields)),
            Ok(Some(_)) => Err(WhispirError::UnexpectedBody),
            Ok(None) => recovered
                .map(|id| self.instance(id))
                .ok_or(WhispirError::UnexpectedBody),
            Err(err) => match recovered {
                Some(id) => Ok(self.instance(id)),
                None => Err(err),
            },
        }
    }

    /// Fetches one instance by identity.
    pub async fn show(&self, id: &str) -> Result<Container, WhispirError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.path(Some(id)))
            .media_type(self.descriptor.media_type)
            .build()?;
        match self.http.request(request).await? {
            Some(Value::Object(fields)) => Ok(self.containerize(fields)),
            Some(_) | None => Err(WhispirError::UnexpectedBody),
        }
    }

    /// Replaces one instance's representation. The server returns no body.
    pub async fn update(&self, id: &str, body: Value) -> Result<(), WhispirError> {
        let request = HttpRequest::builder(HttpMethod::Put, self.path(Some(id)))
            .body(body)
            .media_type(self.descriptor.media_type)
            .build()?;
        self.http.send(request).await?;
        Ok(())
    }

    /// Deletes one instance by identity.
    pub async fn delete(&self, id: &str) -> Result<(), WhispirError> {
        let request = HttpRequest::builder(HttpMethod::Delete, self.path(Some(id)))
            .media_type(self.descriptor.media_type)
            .build()?;
        self.http.send(request).await?;
        Ok(())
    }

    /// Starts a lazy traversal of the collection's instances.
    #[must_use]
    pub fn list(&self, options: ListOptions) -> ContainerIter {
        let mut query = options.filters;
        let explicit_window = options.offset.is_some() || options.limit.is_some();
        if let Some(offset) = options.offset {
            query.insert("offset".to_string(), offset.to_string());
        }
        if let Some(limit) = options.limit {
            query.insert("limit".to_string(), limit.to_string());
        }
        ContainerIter::new(self.clone(), query, explicit_window)
    }

    /// Fetches one listing page, absorbing `404` as an empty page — the
    /// server reports an out-of-range page that way, and an empty page ends
    /// the traversal.
    pub(crate) async fn fetch_page(
        &self,
        query: &HashMap<String, String>,
    ) -> Result<Map<String, Value>, WhispirError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.path(None))
            .media_type(self.descriptor.media_type)
            .query(query.clone())
            .build()?;
        match self.http.request(request).await {
            Ok(Some(Value::Object(page))) => Ok(page),
            Ok(Some(_)) => Err(WhispirError::UnexpectedBody),
            Ok(None) => Ok(Map::new()),
            Err(WhispirError::Client(response) | WhispirError::JsonDecode(response))
                if response.code == 404 =>
            {
                Ok(Map::new())
            }
            Err(err) => Err(err),
        }
    }
}
