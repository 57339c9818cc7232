use std::sync::Arc;

use crate::engine::capability::EntityExtractor;
use crate::engine::error::NodeError;
use crate::engine::node::{required_text, Node};
use crate::model::node_kind::NodeKind;
use crate::model::node_output::NodeOutput;
use crate::model::node_status::ProcessOutcome;
use crate::model::result_view::ResultView;
use crate::model::shared_context::{NodeContext, SharedContext};

pub struct NerNode {
    extractor: Arc<dyn EntityExtractor>,
    pub text: String,
}

impl NerNode {
    pub fn new(extractor: Arc<dyn EntityExtractor>) -> Self {
        Self {
            extractor,
            text: String::new(),
        }
    }
}

impl Node for NerNode {
    fn title(&self) -> &str {
        "Named Entity Recognition Node"
    }

    fn kind(&self) -> NodeKind {
        NodeKind::EntityRecognition
    }

    fn trigger_label(&self) -> &str {
        "Extract Entities"
    }

    fn set_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label("Enter text for Named Entity Recognition");
        ui.text_edit_multiline(&mut self.text);
    }

    fn process(&mut self, ctx: &mut NodeContext<'_>) -> Result<ProcessOutcome, NodeError> {
        let Some(text) = required_text(&self.text) else {
            return Ok(ProcessOutcome::Skipped);
        };
        let entities = self
            .extractor
            .extract(text)
            .map_err(|e| NodeError::from_capability("entity extractor", e))?;

        ctx.publish(NodeOutput::Entities(entities))?;
        Ok(ProcessOutcome::Produced)
    }

    fn result_view(&self, ctx: &SharedContext) -> ResultView {
        match ctx.get(NodeKind::EntityRecognition) {
            Some(NodeOutput::Entities(list)) if !list.is_empty() => ResultView::Entities(list.clone()),
            _ => ResultView::Placeholder("No entities found."),
        }
    }
}
