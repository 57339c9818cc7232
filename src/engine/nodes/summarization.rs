use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::engine::capability::Summarizer;
use crate::engine::error::NodeError;
use crate::engine::node::{required_text, Node};
use crate::model::node_kind::NodeKind;
use crate::model::node_output::NodeOutput;
use crate::model::node_status::ProcessOutcome;
use crate::model::result_view::ResultView;
use crate::model::shared_context::{NodeContext, SharedContext};

pub const MAX_LENGTH_RANGE: RangeInclusive<u32> = 10..=200;
pub const DEFAULT_MAX_LENGTH: u32 = 50;
pub const MIN_LENGTH: u32 = 10;

pub struct SummarizationNode {
    summarizer: Arc<dyn Summarizer>,
    pub text: String,
    pub max_length: u32,
}

impl SummarizationNode {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            summarizer,
            text: String::new(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Node for SummarizationNode {
    fn title(&self) -> &str {
        "Summarization Node"
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Summarization
    }

    fn trigger_label(&self) -> &str {
        "Summarize"
    }

    fn set_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label("Enter text to summarize");
        ui.text_edit_multiline(&mut self.text);
        ui.add(egui::Slider::new(&mut self.max_length, MAX_LENGTH_RANGE).text("Summary Length"));
    }

    fn process(&mut self, ctx: &mut NodeContext<'_>) -> Result<ProcessOutcome, NodeError> {
        let Some(text) = required_text(&self.text) else {
            return Ok(ProcessOutcome::Skipped);
        };

        let max_length = self.max_length.clamp(*MAX_LENGTH_RANGE.start(), *MAX_LENGTH_RANGE.end());
        let summary = self
            .summarizer
            .summarize(text, MIN_LENGTH.min(max_length), max_length)
            .map_err(|e| NodeError::from_capability("summarization model", e))?;

        ctx.publish(NodeOutput::Summary(summary))?;
        Ok(ProcessOutcome::Produced)
    }

    fn result_view(&self, ctx: &SharedContext) -> ResultView {
        match ctx.get(NodeKind::Summarization) {
            Some(NodeOutput::Summary(s)) => ResultView::Text {
                label: "Summary",
                value: s.clone(),
            },
            _ => ResultView::Placeholder("No summary generated."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::capability::fakes::FakeSummarizer;
    use crate::engine::node::harness::assert_node_contract;

    #[test]
    fn follows_node_contract() {
        assert_node_contract(&mut SummarizationNode::new(Arc::new(FakeSummarizer)));
    }

    #[test]
    fn empty_text_shows_placeholder() {
        let mut node = SummarizationNode::new(Arc::new(FakeSummarizer));
        let mut ctx = SharedContext::new();

        let outcome = node.process(&mut ctx.scope(NodeKind::Summarization)).unwrap();

        assert_eq!(outcome, ProcessOutcome::Skipped);
        assert!(ctx.is_empty());
        assert_eq!(node.result_view(&ctx), ResultView::Placeholder("No summary generated."));
    }

    #[test]
    fn max_length_bounds_the_summary() {
        let mut node = SummarizationNode::new(Arc::new(FakeSummarizer));
        node.text = (0..300).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        node.max_length = 12;

        let mut ctx = SharedContext::new();
        node.process(&mut ctx.scope(NodeKind::Summarization)).unwrap();

        let Some(NodeOutput::Summary(s)) = ctx.get(NodeKind::Summarization) else {
            panic!("summary missing");
        };
        assert_eq!(s.split_whitespace().count(), 12);
    }
}
