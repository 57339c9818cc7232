use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::engine::registry::available_nodes;

/// Persisted application settings. Missing fields fall back to defaults so
/// older files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub ui_scale: f32,

    /// LibreTranslate-compatible base URL.
    pub translation_endpoint: String,

    /// OpenAI-compatible base URL used for summaries, entities and captions.
    pub llm_endpoint: String,
    pub llm_model: String,

    pub speech_endpoint: String,
    pub speech_model: String,
    pub speech_voice: String,

    pub request_timeout_secs: u64,

    /// Where `speech.mp3` is written.
    pub audio_output_dir: PathBuf,

    /// Registry ids, in display order.
    pub enabled_nodes: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            translation_endpoint: "http://localhost:5000".into(),
            llm_endpoint: "http://localhost:1234/v1".into(),
            llm_model: "local-model".into(),
            speech_endpoint: "http://localhost:8880/v1".into(),
            speech_model: "tts-1".into(),
            speech_voice: "alloy".into(),
            request_timeout_secs: 60,
            audio_output_dir: PathBuf::from("."),
            enabled_nodes: available_nodes().into_iter().map(String::from).collect(),
        }
    }
}

impl AppSettings {
    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled_nodes.iter().any(|n| n == id)
    }

    /// Toggle a node id, keeping the rest of the order intact.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) {
        match (self.is_enabled(id), enabled) {
            (false, true) => self.enabled_nodes.push(id.to_string()),
            (true, false) => self.enabled_nodes.retain(|n| n != id),
            _ => {}
        }
    }
}
