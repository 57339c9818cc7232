use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

use crate::model::node_kind::NodeKind;

/// `info!` when a user trigger starts a node.
pub struct NodeRunStarted<'a> {
    pub title: &'a str,
    pub kind: NodeKind,
}

impl Display for NodeRunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Node '{}' ({}) started", self.title, self.kind)
    }
}

/// `info!` after a node wrote its slot.
pub struct NodeRunProduced<'a> {
    pub title: &'a str,
    pub kind: NodeKind,
    pub duration: Duration,
}

impl Display for NodeRunProduced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' wrote slot '{}' in {:?}",
            self.title,
            self.kind.slot_key(),
            self.duration
        )
    }
}

/// `debug!` when required input was missing.
pub struct NodeRunSkipped<'a> {
    pub title: &'a str,
}

impl Display for NodeRunSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Node '{}' skipped: required input is empty", self.title)
    }
}

/// `warn!` when a node run failed. The session continues.
pub struct NodeRunFailed<'a> {
    pub title: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for NodeRunFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Node '{}' failed: {}", self.title, self.error)
    }
}

/// `warn!` for an enabled node id the registry cannot build.
pub struct NodeSkippedAtStartup<'a> {
    pub id: &'a str,
    pub reason: &'a dyn std::error::Error,
}

impl Display for NodeSkippedAtStartup<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping node '{}': {}", self.id, self.reason)
    }
}

/// `warn!` when the settings file exists but cannot be used.
pub struct SettingsFallback<'a> {
    pub path: &'a Path,
    pub error: &'a anyhow::Error,
}

impl Display for SettingsFallback<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Could not load settings from {}: {:#}. Using defaults.",
            self.path.display(),
            self.error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produced_message_names_slot() {
        let msg = NodeRunProduced {
            title: "Summarization Node",
            kind: NodeKind::Summarization,
            duration: Duration::from_millis(5),
        };
        assert_eq!(msg.to_string(), "Node 'Summarization Node' wrote slot 'summary' in 5ms");
    }
}
