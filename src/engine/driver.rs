use std::time::Instant;

use tracing::{debug, info, warn};

use crate::engine::error::NodeError;
use crate::engine::node::Node;
use crate::model::node_status::{NodeStatus, ProcessOutcome};
use crate::model::shared_context::SharedContext;
use crate::observability::messages::{NodeRunFailed, NodeRunProduced, NodeRunSkipped, NodeRunStarted};

/// One node plus what the driver knows about it. `node` is `None` while the
/// node is checked out to the engine thread.
pub struct NodeSlot {
    node: Option<Box<dyn Node>>,
    pub title: String,
    pub trigger_label: String,
    pub status: NodeStatus,
}

impl NodeSlot {
    pub fn node_mut(&mut self) -> Option<&mut (dyn Node + 'static)> {
        self.node.as_deref_mut()
    }
}

/// A node taken out of the driver to run elsewhere.
pub struct CheckedOut {
    pub index: usize,
    pub node: Box<dyn Node>,
    pub context: SharedContext,
}

/// Owns the node list and the session context; runs one node per user trigger.
pub struct NodeDriver {
    slots: Vec<NodeSlot>,
    context: SharedContext,
}

/// Run one node against a context and log the outcome.
pub fn run_node(node: &mut dyn Node, context: &mut SharedContext) -> Result<ProcessOutcome, NodeError> {
    let kind = node.kind();
    info!("{}", NodeRunStarted { title: node.title(), kind });
    let started = Instant::now();

    let result = node.process(&mut context.scope(kind));

    match &result {
        Ok(ProcessOutcome::Produced) => info!(
            "{}",
            NodeRunProduced {
                title: node.title(),
                kind,
                duration: started.elapsed(),
            }
        ),
        Ok(ProcessOutcome::Skipped) => debug!("{}", NodeRunSkipped { title: node.title() }),
        Err(e) => warn!("{}", NodeRunFailed { title: node.title(), error: e }),
    }

    result
}

impl NodeDriver {
    pub fn new(nodes: Vec<Box<dyn Node>>) -> Self {
        let slots = nodes
            .into_iter()
            .map(|node| NodeSlot {
                title: node.title().to_string(),
                trigger_label: node.trigger_label().to_string(),
                node: Some(node),
                status: NodeStatus::Idle,
            })
            .collect();

        Self {
            slots,
            context: SharedContext::new(),
        }
    }

    pub fn context(&self) -> &SharedContext {
        &self.context
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<&NodeSlot> {
        self.slots.get(index)
    }

    /// Split borrow: every slot mutably, plus the context for display.
    pub fn slots_and_context(&mut self) -> (&mut [NodeSlot], &SharedContext) {
        (self.slots.as_mut_slice(), &self.context)
    }

    pub fn is_busy(&self) -> bool {
        self.slots.iter().any(|s| s.status.is_running())
    }

    /// Start a fresh session context. Node inputs are kept.
    pub fn reset_context(&mut self) {
        self.context.clear();
        for slot in &mut self.slots {
            if !slot.status.is_running() {
                slot.status = NodeStatus::Idle;
            }
        }
    }

    /// Run the node at `index` in place. Returns `None` if the index is out of
    /// range or another node is running.
    pub fn trigger(&mut self, index: usize) -> Option<NodeStatus> {
        let mut job = self.check_out(index)?;
        let result = run_node(&mut *job.node, &mut job.context);
        self.check_in(job, result);
        self.slot(index).map(|s| s.status.clone())
    }

    /// Take a node and a copy of the context out so they can be processed on
    /// another thread. Refused while any node is running.
    pub fn check_out(&mut self, index: usize) -> Option<CheckedOut> {
        if self.is_busy() {
            return None;
        }
        let slot = self.slots.get_mut(index)?;
        let node = slot.node.take()?;
        slot.status = NodeStatus::Running;

        Some(CheckedOut {
            index,
            node,
            context: self.context.clone(),
        })
    }

    /// Return a checked-out node. On success the node's own slot is copied into
    /// the session context; nothing else from the job's copy is kept.
    pub fn check_in(&mut self, job: CheckedOut, result: Result<ProcessOutcome, NodeError>) {
        let Some(slot) = self.slots.get_mut(job.index) else {
            return;
        };
        let kind = job.node.kind();
        slot.node = Some(job.node);
        slot.status = match result {
            Ok(ProcessOutcome::Produced) => {
                self.context.merge_slot(job.context, kind);
                NodeStatus::Produced
            }
            Ok(ProcessOutcome::Skipped) => NodeStatus::Skipped,
            Err(e) => NodeStatus::Failed { reason: e.to_string() },
        };
    }
}
