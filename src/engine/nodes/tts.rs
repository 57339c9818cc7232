use std::path::PathBuf;
use std::sync::Arc;

use crate::engine::capability::SpeechSynthesizer;
use crate::engine::error::NodeError;
use crate::engine::node::{required_text, Node};
use crate::model::node_kind::NodeKind;
use crate::model::node_output::NodeOutput;
use crate::model::node_status::ProcessOutcome;
use crate::model::result_view::ResultView;
use crate::model::shared_context::{NodeContext, SharedContext};

pub const AUDIO_FILE_NAME: &str = "speech.mp3";

pub struct TtsNode {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    audio_dir: PathBuf,
    pub text: String,
}

impl TtsNode {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, audio_dir: PathBuf) -> Self {
        Self {
            synthesizer,
            audio_dir,
            text: String::new(),
        }
    }

    pub fn audio_path(&self) -> PathBuf {
        self.audio_dir.join(AUDIO_FILE_NAME)
    }
}

impl Node for TtsNode {
    fn title(&self) -> &str {
        "Text-to-Speech Node"
    }

    fn kind(&self) -> NodeKind {
        NodeKind::TextToSpeech
    }

    fn trigger_label(&self) -> &str {
        "Synthesize Speech"
    }

    fn set_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label("Enter text for speech synthesis");
        ui.text_edit_multiline(&mut self.text);
    }

    fn process(&mut self, ctx: &mut NodeContext<'_>) -> Result<ProcessOutcome, NodeError> {
        let Some(text) = required_text(&self.text) else {
            return Ok(ProcessOutcome::Skipped);
        };
        let path = self.audio_path();
        self.synthesizer
            .synthesize_to_file(text, &path)
            .map_err(|e| NodeError::from_capability("speech synthesizer", e))?;

        ctx.publish(NodeOutput::TtsAudio(path))?;
        Ok(ProcessOutcome::Produced)
    }

    fn result_view(&self, ctx: &SharedContext) -> ResultView {
        match ctx.get(NodeKind::TextToSpeech) {
            Some(NodeOutput::TtsAudio(path)) => ResultView::Audio(path.clone()),
            _ => ResultView::Placeholder("No speech generated."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::capability::fakes::FakeSpeech;
    use crate::engine::node::harness::assert_node_contract;

    #[test]
    fn follows_node_contract() {
        let dir = tempfile::tempdir().unwrap();
        assert_node_contract(&mut TtsNode::new(Arc::new(FakeSpeech), dir.path().to_path_buf()));
    }

    #[test]
    fn writes_fixed_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut node = TtsNode::new(Arc::new(FakeSpeech), dir.path().to_path_buf());
        node.text = "good evening".into();

        let mut ctx = SharedContext::new();
        node.process(&mut ctx.scope(NodeKind::TextToSpeech)).unwrap();

        let expected = dir.path().join("speech.mp3");
        assert_eq!(node.result_view(&ctx), ResultView::Audio(expected.clone()));
        assert_eq!(std::fs::read_to_string(expected).unwrap(), "good evening");
    }
}
