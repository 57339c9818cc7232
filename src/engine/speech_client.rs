use std::fs;
use std::path::Path;

use reqwest::blocking::Client;
use serde::Serialize;

use crate::engine::capability::{CapabilityResult, SpeechSynthesizer};
use crate::engine::error::CapabilityError;
use crate::engine::http::{check_status, transport_error};

#[derive(Serialize)]
pub struct SpeechRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
    pub voice: &'a str,
    pub response_format: &'a str,
}

/// OpenAI-compatible `/audio/speech` backend.
pub struct SpeechClient {
    http: Client,
    endpoint: String,
    model: String,
    voice: String,
}

impl SpeechClient {
    pub fn new(http: Client, endpoint: &str, model: &str, voice: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            voice: voice.to_string(),
        }
    }
}

impl SpeechSynthesizer for SpeechClient {
    fn synthesize_to_file(&self, text: &str, path: &Path) -> CapabilityResult<()> {
        let req = SpeechRequest {
            model: &self.model,
            input: text,
            voice: &self.voice,
            response_format: "mp3",
        };

        let resp = self
            .http
            .post(format!("{}/audio/speech", self.endpoint))
            .json(&req)
            .send()
            .map_err(transport_error)?;

        let audio = check_status(resp)?.bytes().map_err(transport_error)?;
        if audio.is_empty() {
            return Err(CapabilityError::Unavailable("synthesizer returned no audio".into()));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| CapabilityError::Unavailable(format!("cannot create {}: {e}", dir.display())))?;
        }
        fs::write(path, &audio)
            .map_err(|e| CapabilityError::Unavailable(format!("cannot write {}: {e}", path.display())))
    }
}
