use serde::{Deserialize, Serialize};

/// What a single `process` call did to the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessOutcome {
    /// The node wrote its slot.
    Produced,
    /// Required input was missing; nothing was written.
    Skipped,
}

/// Last known state of a node as tracked by the driver.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeStatus {
    #[default]
    Idle,
    Running,
    Produced,
    Skipped,
    Failed { reason: String },
}

impl NodeStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, NodeStatus::Running)
    }
}
