use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::node_kind::NodeKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
}

/// Lexicon sentiment axes. `neg`, `neu` and `pos` are proportions of the text
/// and sum to 1; `compound` is the normalised overall valence in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

/// A value stored in the shared context. The variant decides the slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeOutput {
    SystemPrompt(String),
    UserInfo(UserInfo),
    TranslatedText(String),
    Summary(String),
    SentimentScores(SentimentScores),
    Entities(Vec<Entity>),
    TtsAudio(PathBuf),
    ImageCaption(String),
}

impl NodeOutput {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeOutput::SystemPrompt(_) => NodeKind::SystemPrompt,
            NodeOutput::UserInfo(_) => NodeKind::UserInfo,
            NodeOutput::TranslatedText(_) => NodeKind::Translation,
            NodeOutput::Summary(_) => NodeKind::Summarization,
            NodeOutput::SentimentScores(_) => NodeKind::SentimentIntensity,
            NodeOutput::Entities(_) => NodeKind::EntityRecognition,
            NodeOutput::TtsAudio(_) => NodeKind::TextToSpeech,
            NodeOutput::ImageCaption(_) => NodeKind::ImageCaption,
        }
    }
}
