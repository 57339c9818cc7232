use std::collections::HashSet;

use tracing::warn;

use crate::engine::capability::Capabilities;
use crate::engine::error::RegistryError;
use crate::engine::node::Node;
use crate::engine::nodes::*;
use crate::model::node_kind::NodeKind;
use crate::observability::messages::NodeSkippedAtStartup;

type Constructor = fn(&Capabilities) -> Box<dyn Node>;

/// Static table of every node the application knows how to build, in default order.
const NODE_TABLE: [(NodeKind, Constructor); 8] = [
    (NodeKind::SystemPrompt, build_system_prompt),
    (NodeKind::UserInfo, build_user_info),
    (NodeKind::Translation, build_translation),
    (NodeKind::Summarization, build_summarization),
    (NodeKind::SentimentIntensity, build_sentiment_intensity),
    (NodeKind::EntityRecognition, build_ner),
    (NodeKind::TextToSpeech, build_tts),
    (NodeKind::ImageCaption, build_image_caption),
];

fn build_system_prompt(_: &Capabilities) -> Box<dyn Node> {
    Box::new(SystemPromptNode::new())
}

fn build_user_info(_: &Capabilities) -> Box<dyn Node> {
    Box::new(UserInfoNode::new())
}

fn build_translation(caps: &Capabilities) -> Box<dyn Node> {
    Box::new(TranslationNode::new(caps.translator.clone()))
}

fn build_summarization(caps: &Capabilities) -> Box<dyn Node> {
    Box::new(SummarizationNode::new(caps.summarizer.clone()))
}

fn build_sentiment_intensity(caps: &Capabilities) -> Box<dyn Node> {
    Box::new(SentimentIntensityNode::new(caps.sentiment.clone()))
}

fn build_ner(caps: &Capabilities) -> Box<dyn Node> {
    Box::new(NerNode::new(caps.entities.clone()))
}

fn build_tts(caps: &Capabilities) -> Box<dyn Node> {
    Box::new(TtsNode::new(caps.speech.clone(), caps.audio_dir.clone()))
}

fn build_image_caption(caps: &Capabilities) -> Box<dyn Node> {
    Box::new(ImageCaptionNode::new(caps.captioner.clone()))
}

/// All registry ids in default order.
pub fn available_nodes() -> Vec<&'static str> {
    NODE_TABLE.iter().map(|(kind, _)| kind.id()).collect()
}

pub fn create_node(id: &str, caps: &Capabilities) -> Result<Box<dyn Node>, RegistryError> {
    NODE_TABLE
        .iter()
        .find(|(kind, _)| kind.id() == id)
        .map(|(_, build)| build(caps))
        .ok_or_else(|| RegistryError::UnknownNode(id.to_string()))
}

/// Build the enabled nodes in the order given. Unknown and repeated ids are
/// logged and left out; a repeat would share its first instance's slot.
pub fn build_nodes(ids: &[String], caps: &Capabilities) -> Vec<Box<dyn Node>> {
    let mut seen = HashSet::new();
    let mut nodes = Vec::new();

    for id in ids {
        let id = id.trim();
        let result = if seen.insert(id.to_string()) {
            create_node(id, caps)
        } else {
            Err(RegistryError::DuplicateNode(id.to_string()))
        };

        match result {
            Ok(node) => nodes.push(node),
            Err(e) => warn!("{}", NodeSkippedAtStartup { id, reason: &e }),
        }
    }

    nodes
}
