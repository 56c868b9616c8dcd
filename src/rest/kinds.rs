//! The resource registry.
//!
//! Every resource kind the API exposes is registered here as a static
//! [`ResourceDescriptor`]: its URL path segment, the key wrapping items in
//! list responses, its vendor media type, its pagination contract, and the
//! child kinds nested beneath it. Collections bind to a descriptor by
//! [`ResourceKind`] tag; nothing is derived from names at runtime.

use crate::rest::pagination::PaginationStrategy;

/// Tag identifying one resource kind exposed by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A workspace: the scoping root for most other kinds.
    Workspace,
    /// A message, sendable at top level or within a workspace.
    Message,
    /// Delivery status entries nested under a message.
    MessageStatus,
    /// Recipient responses nested under a message.
    MessageResponse,
    /// A message template.
    Template,
    /// A response rule.
    ResponseRule,
    /// A contact.
    Contact,
    /// A registered application.
    App,
}

/// Static configuration for one resource kind.
#[derive(Debug)]
pub struct ResourceDescriptor {
    /// The kind this descriptor belongs to.
    pub kind: ResourceKind,
    /// URL path segment for the collection.
    pub segment: &'static str,
    /// Key wrapping the item array in list responses.
    pub list_key: &'static str,
    /// Vendor media type sent as `Content-Type` and `Accept`.
    pub media_type: &'static str,
    /// How list responses are traversed.
    pub pagination: PaginationStrategy,
}

const WORKSPACE: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Workspace,
    segment: "workspaces",
    list_key: "workspaces",
    media_type: "application/vnd.whispir.workspace-v1+json",
    pagination: PaginationStrategy::NonPaginated,
};

const MESSAGE: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Message,
    segment: "messages",
    list_key: "messages",
    media_type: "application/vnd.whispir.message-v1+json",
    pagination: PaginationStrategy::OffsetIncrement,
};

const MESSAGE_STATUS: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::MessageStatus,
    // The status endpoint is singular, unlike its list key.
    segment: "messagestatus",
    list_key: "messageStatuses",
    media_type: "application/vnd.whispir.messagestatus-v1+json",
    pagination: PaginationStrategy::LinkFollowing,
};

const MESSAGE_RESPONSE: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::MessageResponse,
    segment: "messageresponses",
    list_key: "messageresponses",
    media_type: "application/vnd.whispir.messageresponse-v1+json",
    pagination: PaginationStrategy::LinkFollowing,
};

const TEMPLATE: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Template,
    segment: "templates",
    list_key: "messagetemplates",
    media_type: "application/vnd.whispir.template-v1+json",
    pagination: PaginationStrategy::LinkFollowing,
};

const RESPONSE_RULE: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::ResponseRule,
    segment: "responserules",
    list_key: "responseRules",
    media_type: "application/vnd.whispir.responserule-v1+json",
    pagination: PaginationStrategy::NonPaginated,
};

const CONTACT: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::Contact,
    segment: "contacts",
    list_key: "contacts",
    media_type: "application/vnd.whispir.contact-v1+json",
    pagination: PaginationStrategy::LinkFollowing,
};

const APP: ResourceDescriptor = ResourceDescriptor {
    kind: ResourceKind::App,
    segment: "apps",
    list_key: "applications",
    media_type: "application/vnd.whispir.app-v1+json",
    pagination: PaginationStrategy::LinkFollowing,
};

impl ResourceKind {
    /// Returns the static descriptor registered for this kind.
    #[must_use]
    pub const fn descriptor(self) -> &'static ResourceDescriptor {
        match self {
            Self::Workspace => &WORKSPACE,
            Self::Message => &MESSAGE,
            Self::MessageStatus => &MESSAGE_STATUS,
            Self::MessageResponse => &MESSAGE_RESPONSE,
            Self::Template => &TEMPLATE,
            Self::ResponseRule => &RESPONSE_RULE,
            Self::Contact => &CONTACT,
            Self::App => &APP,
        }
    }

    /// Returns the kinds nested beneath an instance of this kind.
    #[must_use]
    pub const fn children(self) -> &'static [Self] {
        match self {
            Self::Workspace => &[
                Self::Message,
                Self::Template,
                Self::ResponseRule,
                Self::Contact,
                Self::App,
            ],
            Self::Message => &[Self::MessageStatus, Self::MessageResponse],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_kind_matches_tag() {
        for kind in [
            ResourceKind::Workspace,
            ResourceKind::Message,
            ResourceKind::MessageStatus,
            ResourceKind::MessageResponse,
            ResourceKind::Template,
            ResourceKind::ResponseRule,
            ResourceKind::Contact,
            ResourceKind::App,
        ] {
            assert_eq!(kind.descriptor().kind, kind);
        }
    }

    #[test]
    fn test_media_types_are_versioned_vendor_types() {
        assert_eq!(
            ResourceKind::Workspace.descriptor().media_type,
            "application/vnd.whispir.workspace-v1+json"
        );
        assert_eq!(
            ResourceKind::MessageStatus.descriptor().media_type,
            "application/vnd.whispir.messagestatus-v1+json"
        );
    }

    #[test]
    fn test_irregular_list_keys() {
        assert_eq!(ResourceKind::Template.descriptor().list_key, "messagetemplates");
        assert_eq!(ResourceKind::App.descriptor().list_key, "applications");
        assert_eq!(
            ResourceKind::MessageStatus.descriptor().list_key,
            "messageStatuses"
        );
        assert_eq!(
            ResourceKind::ResponseRule.descriptor().list_key,
            "responseRules"
        );
    }

    #[test]
    fn test_message_status_segment_is_singular() {
        assert_eq!(ResourceKind::MessageStatus.descriptor().segment, "messagestatus");
    }

    #[test]
    fn test_pagination_contracts() {
        assert_eq!(
            ResourceKind::Workspace.descriptor().pagination,
            PaginationStrategy::NonPaginated
        );
        assert_eq!(
            ResourceKind::Message.descriptor().pagination,
            PaginationStrategy::OffsetIncrement
        );
        assert_eq!(
            ResourceKind::Contact.descriptor().pagination,
            PaginationStrategy::LinkFollowing
        );
    }

    #[test]
    fn test_child_kind_registry() {
        assert_eq!(ResourceKind::Workspace.children().len(), 5);
        assert_eq!(
            ResourceKind::Message.children(),
            &[ResourceKind::MessageStatus, ResourceKind::MessageResponse]
        );
        assert!(ResourceKind::Contact.children().is_empty());
    }
}
