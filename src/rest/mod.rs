//! The resource layer.
//!
//! [`Whispir`] is the entry point. It hands out [`Collection`]s — one per
//! resource kind per scope — whose operations return [`Container`]s, the
//! schemaless images of server-side instances. Containers of kinds with
//! registered children (workspaces, messages) expose nested collections
//! scoped to themselves, so the hierarchy is walked by plain method calls:
//!
//! ```rust,ignore
//! let workspace = whispir.workspaces().show("ABC123").await?;
//! let message = workspace.messages().unwrap().show("9723ABB5948B9AF2").await?;
//! let statuses = message.statuses().unwrap().list(ListOptions::default());
//! ```

pub mod client;
pub mod collection;
pub mod container;
pub mod kinds;
pub mod pagination;

pub use client::Whispir;
pub use collection::{Collection, ListOptions};
pub use container::Container;
pub use kinds::{ResourceDescriptor, ResourceKind};
pub use pagination::{ContainerIter, PaginationStrategy};

use serde_json::Value;

/// Finds the URI of a given relation in a resource's `link` array.
pub(crate) fn link_uri<'a>(links: Option<&'a Value>, rel: &str) -> Option<&'a str> {
    links?
        .as_array()?
        .iter()
        .find(|link| link.get("rel").and_then(Value::as_str) == Some(rel))?
        .get("uri")?
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_uri_finds_relation() {
        let links = json!([
            {"rel": "self", "uri": "https://host/workspaces/W1"},
            {"rel": "next", "uri": "https://host/workspaces?offset=20&limit=20"}
        ]);
        assert_eq!(
            link_uri(Some(&links), "next"),
            Some("https://host/workspaces?offset=20&limit=20")
        );
    }

    #[test]
    fn test_link_uri_absent_relation() {
        let links = json!([{"rel": "self", "uri": "https://host/workspaces/W1"}]);
        assert_eq!(link_uri(Some(&links), "next"), None);
        assert_eq!(link_uri(None, "self"), None);
        assert_eq!(link_uri(Some(&json!("not-an-array")), "self"), None);
    }
}
