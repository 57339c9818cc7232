use thiserror::Error;

use crate::model::node_kind::NodeKind;

/// Failure reported by an external capability backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CapabilityError {
    /// Service unreachable, timed out, failed internally, or replied with garbage.
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// The service understood the request and refused it.
    #[error("rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NodeError {
    #[error("{capability} is unavailable: {reason}")]
    CapabilityUnavailable {
        capability: &'static str,
        reason: String,
    },

    #[error("{capability} rejected the request: {reason}")]
    CapabilityRejected {
        capability: &'static str,
        reason: String,
    },

    #[error("node '{owner}' may not write the '{}' slot", .attempted.slot_key())]
    ForeignSlot { owner: NodeKind, attempted: NodeKind },
}

impl NodeError {
    pub fn from_capability(capability: &'static str, err: CapabilityError) -> Self {
        match err {
            CapabilityError::Unavailable(reason) => NodeError::CapabilityUnavailable { capability, reason },
            CapabilityError::Rejected(reason) => NodeError::CapabilityRejected { capability, reason },
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown node '{0}'")]
    UnknownNode(String),

    #[error("node '{0}' is already registered")]
    DuplicateNode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_errors_map_to_node_taxonomy() {
        let e = NodeError::from_capability("translation service", CapabilityError::Rejected("bad target".into()));
        assert_eq!(e.to_string(), "translation service rejected the request: bad target");

        let e = NodeError::from_capability("speech synthesizer", CapabilityError::Unavailable("timed out".into()));
        assert!(matches!(e, NodeError::CapabilityUnavailable { .. }));
    }

    #[test]
    fn foreign_slot_message_names_the_slot() {
        let e = NodeError::ForeignSlot {
            owner: NodeKind::UserInfo,
            attempted: NodeKind::Summarization,
        };
        assert_eq!(e.to_string(), "node 'user_info' may not write the 'summary' slot");
    }
}
