use std::sync::Arc;

use crate::engine::capability::SentimentScorer;
use crate::engine::error::NodeError;
use crate::engine::node::{required_text, Node};
use crate::model::node_kind::NodeKind;
use crate::model::node_output::NodeOutput;
use crate::model::node_status::ProcessOutcome;
use crate::model::result_view::ResultView;
use crate::model::shared_context::{NodeContext, SharedContext};

pub struct SentimentIntensityNode {
    scorer: Arc<dyn SentimentScorer>,
    pub text: String,
}

impl SentimentIntensityNode {
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self {
            scorer,
            text: String::new(),
        }
    }
}

impl Node for SentimentIntensityNode {
    fn title(&self) -> &str {
        "Sentiment Intensity Node"
    }

    fn kind(&self) -> NodeKind {
        NodeKind::SentimentIntensity
    }

    fn trigger_label(&self) -> &str {
        "Run Sentiment Analysis"
    }

    fn set_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label("Enter text for sentiment analysis");
        ui.text_edit_multiline(&mut self.text);
    }

    fn process(&mut self, ctx: &mut NodeContext<'_>) -> Result<ProcessOutcome, NodeError> {
        let Some(text) = required_text(&self.text) else {
            return Ok(ProcessOutcome::Skipped);
        };
        let scores = self.scorer.polarity_scores(text);
        ctx.publish(NodeOutput::SentimentScores(scores))?;
        Ok(ProcessOutcome::Produced)
    }

    fn result_view(&self, ctx: &SharedContext) -> ResultView {
        match ctx.get(NodeKind::SentimentIntensity) {
            Some(NodeOutput::SentimentScores(s)) => ResultView::Scores(*s),
            _ => ResultView::Placeholder("No sentiment analysis performed."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::node::harness::assert_node_contract;
    use crate::engine::nodes::UserInfoNode;
    use crate::engine::sentiment::LexiconScorer;

    fn node(text: &str) -> SentimentIntensityNode {
        let mut node = SentimentIntensityNode::new(Arc::new(LexiconScorer::new()));
        node.text = text.into();
        node
    }

    #[test]
    fn follows_node_contract() {
        assert_node_contract(&mut node(""));
    }

    #[test]
    fn i_love_this_yields_four_bounded_axes() {
        let mut node = node("I love this");
        let mut ctx = SharedContext::new();
        node.process(&mut ctx.scope(NodeKind::SentimentIntensity)).unwrap();

        let ResultView::Scores(s) = node.result_view(&ctx) else {
            panic!("expected scores");
        };
        assert!(s.pos > 0.0 && s.compound > 0.0);
        assert!((s.neg + s.neu + s.pos - 1.0).abs() <= 0.002);
        assert!((-1.0..=1.0).contains(&s.compound));
    }

    #[test]
    fn user_info_writes_do_not_affect_scores() {
        let mut alone = SharedContext::new();
        node("I love this")
            .process(&mut alone.scope(NodeKind::SentimentIntensity))
            .unwrap();

        let mut shared = SharedContext::new();
        let mut user = UserInfoNode::new();
        user.name = "Grace".into();
        user.email = "grace@example.com".into();
        user.process(&mut shared.scope(NodeKind::UserInfo)).unwrap();
        let before = shared.get(NodeKind::UserInfo).cloned();

        node("I love this")
            .process(&mut shared.scope(NodeKind::SentimentIntensity))
            .unwrap();

        assert_eq!(
            alone.get(NodeKind::SentimentIntensity),
            shared.get(NodeKind::SentimentIntensity)
        );
        assert_eq!(shared.get(NodeKind::UserInfo).cloned(), before);
    }
}
