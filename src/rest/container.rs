//! Resource containers.
//!
//! A [`Container`] is the in-memory image of one server-side resource
//! instance: a schemaless, ordered field map plus a derived identity and an
//! owning scope. Unknown fields pass through untouched, so the client stays
//! forward compatible with server schema additions.
//!
//! Identity resolution order: an explicit `id` field wins; failing that, the
//! `link` array's `rel="self"` entry contributes the final path segment of
//! its URI. Once resolved, identity is written into the fields and never
//! changes.
//!
//! Containers for kinds with registered children (workspaces, messages)
//! construct their nested collections once, at build time, scoped to their
//! own path — nesting composes to any depth without hardcoded levels.

use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::rest::collection::Collection;
use crate::rest::kinds::ResourceKind;
use crate::rest::link_uri;

/// One server-side resource instance.
///
/// # Example
///
/// ```rust,ignore
/// let workspace = whispir.workspaces().show("ABC123").await?;
/// assert_eq!(workspace.id(), Some("ABC123"));
///
/// // Nested collections are scoped to the workspace
/// let messages = workspace.messages().unwrap();
/// let sent = messages.create(json!({"to": "+61400000000", "body": "hi"})).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Container {
    collection: Collection,
    fields: Map<String, Value>,
    children: Vec<(ResourceKind, Collection)>,
}

impl Container {
    /// Builds a container from decoded fields, resolving identity and
    /// constructing child collections.
    pub(crate) fn new(collection: Collection, mut fields: Map<String, Value>) -> Self {
        if !fields.contains_key("id") {
            if let Some(id) = id_from_links(fields.get("link")) {
                fields.insert("id".to_string(), Value::String(id));
            }
        }

        let children = match fields.get("id").and_then(Value::as_str) {
            Some(id) => {
                let scope = collection.path(Some(id));
                collection
                    .kind()
                    .children()
                    .iter()
                    .map(|child| (*child, collection.child_collection(*child, scope.clone())))
                    .collect()
            }
            // Without an identity the scope path cannot be built.
            None => Vec::new(),
        };

        Self {
            collection,
            fields,
            children,
        }
    }

    /// Returns the kind of resource this container holds.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.collection.kind()
    }

    /// Returns the resolved identity, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    /// Returns the network path of this instance, if its identity resolved.
    #[must_use]
    pub fn path(&self) -> Option<String> {
        self.id().map(|id| self.collection.path(Some(id)))
    }

    /// Returns the ordered field map.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns a single field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the nested collection for a child kind, if registered.
    #[must_use]
    pub fn child(&self, kind: ResourceKind) -> Option<&Collection> {
        self.children
            .iter()
            .find(|(child, _)| *child == kind)
            .map(|(_, collection)| collection)
    }

    /// Messages scoped beneath this workspace.
    #[must_use]
    pub fn messages(&self) -> Option<&Collection> {
        self.child(ResourceKind::Message)
    }

    /// Templates scoped beneath this workspace.
    #[must_use]
    pub fn templates(&self) -> Option<&Collection> {
        self.child(ResourceKind::Template)
    }

    /// Response rules scoped beneath this workspace.
    #[must_use]
    pub fn response_rules(&self) -> Option<&Collection> {
        self.child(ResourceKind::ResponseRule)
    }

    /// Contacts scoped beneath this workspace.
    #[must_use]
    pub fn contacts(&self) -> Option<&Collection> {
        self.child(ResourceKind::Contact)
    }

    /// Apps scoped beneath this workspace.
    #[must_use]
    pub fn apps(&self) -> Option<&Collection> {
        self.child(ResourceKind::App)
    }

    /// Delivery statuses scoped beneath this message.
    #[must_use]
    pub fn statuses(&self) -> Option<&Collection> {
        self.child(ResourceKind::MessageStatus)
    }

    /// Recipient responses scoped beneath this message.
    #[must_use]
    pub fn responses(&self) -> Option<&Collection> {
        self.child(ResourceKind::MessageResponse)
    }
}

impl Serialize for Container {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}

/// Extracts the final path segment of a URI, ignoring query and fragment.
pub(crate) fn id_from_uri(uri: &str) -> Option<String> {
    let path = uri.split(['?', '#']).next().unwrap_or(uri);
    let path = path.trim_end_matches('/');
    path.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
}

/// Derives an identity from a `link` array's `rel="self"` entry.
fn id_from_links(links: Option<&Value>) -> Option<String> {
    link_uri(links, "self").and_then(id_from_uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpClient;
    use crate::config::{ApiKey, Password, Username, WhispirConfig};
    use serde_json::json;
    use std::sync::Arc;

    fn collection(kind: ResourceKind) -> Collection {
        let config = WhispirConfig::builder()
            .username(Username::new("alice").unwrap())
            .password(Password::new("hunter2").unwrap())
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();
        Collection::root(Arc::new(HttpClient::new(&config)), kind, 20)
    }

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_identity_from_explicit_id_field() {
        let container = Container::new(
            collection(ResourceKind::Workspace),
            fields(json!({"id": "XYZ", "projectName": "ops"})),
        );
        assert_eq!(container.id(), Some("XYZ"));
    }

    #[test]
    fn test_identity_from_self_link() {
        let container = Container::new(
            collection(ResourceKind::Workspace),
            fields(json!({
                "projectName": "ops",
                "link": [
                    {"rel": "next", "uri": "https://api.whispir.com/workspaces?offset=20&limit=20"},
                    {"rel": "self", "uri": "https://api.whispir.com/workspaces/ABC123"}
                ]
            })),
        );
        assert_eq!(container.id(), Some("ABC123"));
    }

    #[test]
    fn test_explicit_id_wins_over_self_link() {
        let container = Container::new(
            collection(ResourceKind::Workspace),
            fields(json!({
                "id": "XYZ",
                "link": [{"rel": "self", "uri": "https://api.whispir.com/other/QQQ"}]
            })),
        );
        assert_eq!(container.id(), Some("XYZ"));
    }

    #[test]
    fn test_identity_written_back_into_fields() {
        let container = Container::new(
            collection(ResourceKind::Workspace),
            fields(json!({
                "link": [{"rel": "self", "uri": "https://api.whispir.com/workspaces/ABC123"}]
            })),
        );
        assert_eq!(container.get("id"), Some(&json!("ABC123")));
    }

    #[test]
    fn test_unknown_fields_pass_through_in_order() {
        let container = Container::new(
            collection(ResourceKind::Contact),
            fields(json!({"id": "C1", "zeta": 1, "alpha": 2, "novel_field": {"deep": true}})),
        );
        let keys: Vec<&str> = container.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "zeta", "alpha", "novel_field"]);
    }

    #[test]
    fn test_path_joins_collection_and_identity() {
        let container = Container::new(
            collection(ResourceKind::Workspace),
            fields(json!({"id": "ABC123"})),
        );
        assert_eq!(container.path().as_deref(), Some("workspaces/ABC123"));
    }

    #[test]
    fn test_workspace_children_are_scoped() {
        let workspace = Container::new(
            collection(ResourceKind::Workspace),
            fields(json!({"id": "W1"})),
        );

        let messages = workspace.messages().unwrap();
        assert_eq!(messages.path(None), "workspaces/W1/messages");
        assert_eq!(messages.path(Some("M1")), "workspaces/W1/messages/M1");
        assert!(workspace.templates().is_some());
        assert!(workspace.response_rules().is_some());
        assert!(workspace.contacts().is_some());
        assert!(workspace.apps().is_some());
        assert!(workspace.statuses().is_none());
    }

    #[test]
    fn test_nesting_composes_to_arbitrary_depth() {
        let workspace = Container::new(
            collection(ResourceKind::Workspace),
            fields(json!({"id": "W1"})),
        );
        let message = Container::new(
            workspace.messages().unwrap().clone(),
            fields(json!({"id": "M1"})),
        );

        let statuses = message.statuses().unwrap();
        assert_eq!(statuses.path(None), "workspaces/W1/messages/M1/messagestatus");
    }

    #[test]
    fn test_container_without_identity_has_no_children() {
        let workspace = Container::new(
            collection(ResourceKind::Workspace),
            fields(json!({"projectName": "ops"})),
        );
        assert!(workspace.id().is_none());
        assert!(workspace.path().is_none());
        assert!(workspace.messages().is_none());
    }

    #[test]
    fn test_serializes_as_plain_fields() {
        let container = Container::new(
            collection(ResourceKind::Contact),
            fields(json!({"id": "C1", "firstName": "Alice"})),
        );
        let serialized = serde_json::to_value(&container).unwrap();
        assert_eq!(serialized, json!({"id": "C1", "firstName": "Alice"}));
    }

    #[test]
    fn test_id_from_uri_strips_query_and_fragment() {
        assert_eq!(
            id_from_uri("https://host/workspaces/W1/messages/9723ABB5948B9AF2?apikey=K"),
            Some("9723ABB5948B9AF2".to_string())
        );
        assert_eq!(
            id_from_uri("https://host/workspaces/ABC123#section"),
            Some("ABC123".to_string())
        );
        assert_eq!(
            id_from_uri("https://host/workspaces/ABC123/"),
            Some("ABC123".to_string())
        );
    }
}
