use crate::engine::error::NodeError;
use crate::engine::node::{required_text, Node};
use crate::model::node_kind::NodeKind;
use crate::model::node_output::NodeOutput;
use crate::model::node_status::ProcessOutcome;
use crate::model::result_view::ResultView;
use crate::model::shared_context::{NodeContext, SharedContext};

/// Stores a free-form system prompt for later nodes to read.
#[derive(Default)]
pub struct SystemPromptNode {
    pub prompt: String,
}

impl SystemPromptNode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for SystemPromptNode {
    fn title(&self) -> &str {
        "System Prompt Node"
    }

    fn kind(&self) -> NodeKind {
        NodeKind::SystemPrompt
    }

    fn trigger_label(&self) -> &str {
        "Store System Prompt"
    }

    fn set_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label("Enter the system prompt");
        ui.text_edit_multiline(&mut self.prompt);
    }

    fn process(&mut self, ctx: &mut NodeContext<'_>) -> Result<ProcessOutcome, NodeError> {
        let Some(prompt) = required_text(&self.prompt) else {
            return Ok(ProcessOutcome::Skipped);
        };
        ctx.publish(NodeOutput::SystemPrompt(prompt.to_string()))?;
        Ok(ProcessOutcome::Produced)
    }

    fn result_view(&self, ctx: &SharedContext) -> ResultView {
        match ctx.get(NodeKind::SystemPrompt) {
            Some(NodeOutput::SystemPrompt(p)) => ResultView::Text {
                label: "System Prompt",
                value: p.clone(),
            },
            _ => ResultView::Placeholder("No system prompt has been provided."),
        }
    }
}
