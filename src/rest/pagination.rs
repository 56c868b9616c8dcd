//! Page traversal.
//!
//! Listing a collection yields a [`ContainerIter`], a lazy forward-only
//! cursor over pages. Pages are fetched on demand: no request is issued
//! until the first call to [`ContainerIter::next`], and a page is only
//! requested once the previous page's items are exhausted.
//!
//! Three traversal strategies cover the server's listing behaviors, chosen
//! per resource kind by its descriptor. A `404` on any page fetch ends the
//! sequence gracefully instead of surfacing an error — the server reports
//! an out-of-range page that way.

use std::collections::{HashMap, VecDeque};

use serde_json::{Map, Value};

use crate::clients::WhispirError;
use crate::rest::collection::Collection;
use crate::rest::container::Container;
use crate::rest::link_uri;

/// How a resource kind's listing endpoint pages its results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationStrategy {
    /// The endpoint returns everything in one response.
    NonPaginated,
    /// The first page is requested at `offset=0` with the configured page
    /// size; each page then carries a `rel="next"` link whose
    /// `offset`/`limit` query parameters locate the following page.
    LinkFollowing,
    /// Pages are addressed by an `offset` that advances by the page size
    /// until an empty page is returned.
    OffsetIncrement,
}

#[derive(Debug)]
enum TraversalMode {
    /// Caller pinned an explicit window; fetch exactly one page.
    SinglePage,
    NonPaginated,
    LinkFollowing,
    OffsetIncrement { offset: u32, limit: u32 },
}

/// Lazy cursor over the containers of a listing.
///
/// ```rust,ignore
/// let mut contacts = workspace.contacts().unwrap().list(ListOptions::default());
/// while let Some(contact) = contacts.next().await {
///     let contact = contact?;
///     println!("{:?}", contact.get("firstName"));
/// }
/// ```
#[derive(Debug)]
pub struct ContainerIter {
    collection: Collection,
    query: HashMap<String, String>,
    buffer: VecDeque<Map<String, Value>>,
    mode: TraversalMode,
    done: bool,
}

impl ContainerIter {
    pub(crate) fn new(
        collection: Collection,
        mut query: HashMap<String, String>,
        explicit_window: bool,
    ) -> Self {
        let mode = if explicit_window {
            TraversalMode::SinglePage
        } else {
            match collection.strategy() {
                PaginationStrategy::NonPaginated => TraversalMode::NonPaginated,
                PaginationStrategy::LinkFollowing => {
                    // The first window is requested explicitly; later windows
                    // come from the server's next links.
                    query.insert("offset".to_string(), "0".to_string());
                    query.insert("limit".to_string(), collection.page_size().to_string());
                    TraversalMode::LinkFollowing
                }
                PaginationStrategy::OffsetIncrement => TraversalMode::OffsetIncrement {
                    offset: 0,
                    limit: collection.page_size(),
                },
            }
        };

        Self {
            collection,
            query,
            buffer: VecDeque::new(),
            mode,
            done: false,
        }
    }

    /// Yields the next container, fetching a page when the current one is
    /// exhausted. Returns `None` once the sequence ends; after an error the
    /// cursor is finished.
    pub async fn next(&mut self) -> Option<Result<Container, WhispirError>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(self.collection.containerize(item)));
            }
            if self.done {
                return None;
            }

            if let TraversalMode::OffsetIncrement { offset, limit } = self.mode {
                self.query.insert("offset".to_string(), offset.to_string());
                self.query.insert("limit".to_string(), limit.to_string());
            }

            let page = match self.collection.fetch_page(&self.query).await {
                Ok(page) => page,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };

            let items = page_items(&page, self.collection.list_key());
            self.advance(&page, items.is_empty());
            self.buffer = items;
        }
    }

    /// Drains the remaining sequence into a vector, stopping at the first
    /// error.
    pub async fn try_collect(mut self) -> Result<Vec<Container>, WhispirError> {
        let mut containers = Vec::new();
        while let Some(container) = self.next().await {
            containers.push(container?);
        }
        Ok(containers)
    }

    /// Decides whether another page follows the one just fetched.
    fn advance(&mut self, page: &Map<String, Value>, page_was_empty: bool) {
        match &mut self.mode {
            TraversalMode::SinglePage | TraversalMode::NonPaginated => self.done = true,
            TraversalMode::LinkFollowing => {
                match link_uri(page.get("link"), "next").and_then(next_page_window) {
                    Some((offset, limit)) => {
                        self.query.insert("offset".to_string(), offset);
                        self.query.insert("limit".to_string(), limit);
                    }
                    None => self.done = true,
                }
            }
            TraversalMode::OffsetIncrement { offset, limit } => {
                if page_was_empty {
                    self.done = true;
                } else {
                    *offset += *limit;
                }
            }
        }
    }
}

/// Pulls the object items out of a page under the kind's list key.
fn page_items(page: &Map<String, Value>, list_key: &str) -> VecDeque<Map<String, Value>> {
    page.get(list_key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_object().cloned())
                .collect()
        })
        .unwrap_or_default()
}

/// Reads the `offset` and `limit` query parameters of a next-page URI.
/// Both must be present; a malformed link ends the traversal.
fn next_page_window(uri: &str) -> Option<(String, String)> {
    let query = uri.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or(query);

    let mut offset = None;
    let mut limit = None;
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some(("offset", value)) if !value.is_empty() => offset = Some(value.to_string()),
            Some(("limit", value)) if !value.is_empty() => limit = Some(value.to_string()),
            _ => {}
        }
    }
    Some((offset?, limit?))
}
