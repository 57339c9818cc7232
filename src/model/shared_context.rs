use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::engine::error::NodeError;
use crate::model::node_kind::NodeKind;
use crate::model::node_output::NodeOutput;

/// Session-wide result bus. One slot per `NodeKind`; created fresh per
/// session and never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedContext {
    slots: BTreeMap<NodeKind, NodeOutput>,
}

impl SharedContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: NodeKind) -> Option<&NodeOutput> {
        self.slots.get(&kind)
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.slots.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.slots.keys().copied()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Scoped write handle for one node run.
    pub fn scope(&mut self, owner: NodeKind) -> NodeContext<'_> {
        NodeContext {
            owner,
            shared: self,
        }
    }

    /// JSON view keyed by slot name, for the inspector panel.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (kind, output) in &self.slots {
            let value = serde_json::to_value(output).unwrap_or(Value::Null);
            map.insert(kind.slot_key().to_string(), value);
        }
        Value::Object(map)
    }

    /// Take `kind`'s slot from a context a node ran against. Every other slot
    /// of `from` is ignored.
    pub fn merge_slot(&mut self, mut from: SharedContext, kind: NodeKind) {
        if let Some(output) = from.slots.remove(&kind) {
            self.slots.insert(kind, output);
        }
    }

    fn insert(&mut self, output: NodeOutput) {
        self.slots.insert(output.kind(), output);
    }
}

/// The view of the shared context handed to `Node::process`.
///
/// Reads see every slot. Writes are restricted to the owner's slot.
pub struct NodeContext<'a> {
    owner: NodeKind,
    shared: &'a mut SharedContext,
}

impl NodeContext<'_> {
    pub fn owner(&self) -> NodeKind {
        self.owner
    }

    pub fn read(&self, kind: NodeKind) -> Option<&NodeOutput> {
        self.shared.get(kind)
    }

    pub fn publish(&mut self, output: NodeOutput) -> Result<(), NodeError> {
        let attempted = output.kind();
        if attempted != self.owner {
            return Err(NodeError::ForeignSlot {
                owner: self.owner,
                attempted,
            });
        }
        self.shared.insert(output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_writes_owner_slot() {
        let mut ctx = SharedContext::new();
        ctx.scope(NodeKind::Summarization)
            .publish(NodeOutput::Summary("short".into()))
            .unwrap();

        assert_eq!(
            ctx.get(NodeKind::Summarization),
            Some(&NodeOutput::Summary("short".into()))
        );
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn publish_to_foreign_slot_is_refused() {
        let mut ctx = SharedContext::new();
        let err = ctx
            .scope(NodeKind::UserInfo)
            .publish(NodeOutput::Summary("hijack".into()))
            .unwrap_err();

        assert!(matches!(
            err,
            NodeError::ForeignSlot {
                owner: NodeKind::UserInfo,
                attempted: NodeKind::Summarization
            }
        ));
        assert!(ctx.is_empty());
    }

    #[test]
    fn republish_overwrites_same_slot() {
        let mut ctx = SharedContext::new();
        let mut scope = ctx.scope(NodeKind::Translation);
        scope
            .publish(NodeOutput::TranslatedText("bonjour".into()))
            .unwrap();
        scope
            .publish(NodeOutput::TranslatedText("hola".into()))
            .unwrap();

        assert_eq!(ctx.len(), 1);
        assert_eq!(
            ctx.get(NodeKind::Translation),
            Some(&NodeOutput::TranslatedText("hola".into()))
        );
    }

    #[test]
    fn merge_slot_takes_only_the_named_slot() {
        let mut ran = SharedContext::new();
        ran.scope(NodeKind::UserInfo)
            .publish(NodeOutput::UserInfo(crate::model::node_output::UserInfo {
                name: "Ada".into(),
                email: String::new(),
            }))
            .unwrap();
        ran.scope(NodeKind::Summarization)
            .publish(NodeOutput::Summary("short".into()))
            .unwrap();

        let mut session = SharedContext::new();
        session.merge_slot(ran, NodeKind::Summarization);

        assert_eq!(session.kinds().collect::<Vec<_>>(), [NodeKind::Summarization]);
    }

    #[test]
    fn json_view_uses_slot_keys() {
        let mut ctx = SharedContext::new();
        ctx.scope(NodeKind::Translation)
            .publish(NodeOutput::TranslatedText("bonjour".into()))
            .unwrap();

        let json = ctx.to_json();
        assert_eq!(json["translated_text"], "bonjour");
    }
}
