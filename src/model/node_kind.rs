use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a capability and the single context slot it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    SystemPrompt,
    UserInfo,
    Translation,
    Summarization,
    SentimentIntensity,
    EntityRecognition,
    TextToSpeech,
    ImageCaption,
}

impl NodeKind {
    pub const ALL: [NodeKind; 8] = [
        NodeKind::SystemPrompt,
        NodeKind::UserInfo,
        NodeKind::Translation,
        NodeKind::Summarization,
        NodeKind::SentimentIntensity,
        NodeKind::EntityRecognition,
        NodeKind::TextToSpeech,
        NodeKind::ImageCaption,
    ];

    /// Registry id used in settings.
    pub fn id(&self) -> &'static str {
        match self {
            NodeKind::SystemPrompt => "system_prompt",
            NodeKind::UserInfo => "user_info",
            NodeKind::Translation => "translation",
            NodeKind::Summarization => "summarization",
            NodeKind::SentimentIntensity => "sentiment_intensity",
            NodeKind::EntityRecognition => "ner",
            NodeKind::TextToSpeech => "tts",
            NodeKind::ImageCaption => "image_caption",
        }
    }

    /// Name of the slot this kind writes, as shown in the context inspector.
    pub fn slot_key(&self) -> &'static str {
        match self {
            NodeKind::SystemPrompt => "system_prompt",
            NodeKind::UserInfo => "user_info",
            NodeKind::Translation => "translated_text",
            NodeKind::Summarization => "summary",
            NodeKind::SentimentIntensity => "sentiment_scores",
            NodeKind::EntityRecognition => "entities",
            NodeKind::TextToSpeech => "tts_audio",
            NodeKind::ImageCaption => "image_caption",
        }
    }

    pub fn from_id(id: &str) -> Option<NodeKind> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
