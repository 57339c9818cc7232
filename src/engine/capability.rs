use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use image::RgbImage;

use crate::engine::error::CapabilityError;
use crate::engine::llm_client::LlmClient;
use crate::engine::sentiment::LexiconScorer;
use crate::engine::speech_client::SpeechClient;
use crate::engine::translate_client::TranslateClient;
use crate::model::node_output::{Entity, SentimentScores};
use crate::ui::settings::AppSettings;

pub type CapabilityResult<T> = Result<T, CapabilityError>;

pub trait Translator: Send + Sync {
    /// Translate `text` (source language auto-detected) into `target`, an ISO 639-1 code.
    fn translate(&self, text: &str, target: &str) -> CapabilityResult<String>;
}

pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, min_length: u32, max_length: u32) -> CapabilityResult<String>;
}

pub trait SentimentScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> SentimentScores;
}

pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> CapabilityResult<Vec<Entity>>;
}

pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` and write the audio to `path`.
    fn synthesize_to_file(&self, text: &str, path: &Path) -> CapabilityResult<()>;
}

pub trait ImageCaptioner: Send + Sync {
    fn caption(&self, image: &RgbImage) -> CapabilityResult<String>;
}

/// Every backend a node might delegate to, built once at startup.
#[derive(Clone)]
pub struct Capabilities {
    pub translator: Arc<dyn Translator>,
    pub summarizer: Arc<dyn Summarizer>,
    pub sentiment: Arc<dyn SentimentScorer>,
    pub entities: Arc<dyn EntityExtractor>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub captioner: Arc<dyn ImageCaptioner>,
    pub audio_dir: PathBuf,
}

impl Capabilities {
    pub fn from_settings(settings: &AppSettings) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(settings.request_timeout_secs.max(1));
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;

        let llm = Arc::new(LlmClient::new(
            http.clone(),
            &settings.llm_endpoint,
            &settings.llm_model,
        ));

        Ok(Self {
            translator: Arc::new(TranslateClient::new(http.clone(), &settings.translation_endpoint)),
            summarizer: llm.clone(),
            sentiment: Arc::new(LexiconScorer::new()),
            entities: llm.clone(),
            speech: Arc::new(SpeechClient::new(
                http,
                &settings.speech_endpoint,
                &settings.speech_model,
                &settings.speech_voice,
            )),
            captioner: llm,
            audio_dir: settings.audio_output_dir.clone(),
        })
    }
}

#[cfg(test)]
pub mod fakes {
    //! In-memory capability doubles shared by node and driver tests.

    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    pub struct FakeTranslator {
        pub calls: AtomicUsize,
        pub fail_with: Mutex<Option<CapabilityError>>,
    }

    impl FakeTranslator {
        pub fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_with: Mutex::new(None),
            }
        }
    }

    impl Translator for FakeTranslator {
        fn translate(&self, text: &str, target: &str) -> CapabilityResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = self.fail_with.lock().unwrap().clone() {
                return Err(err);
            }
            match target {
                "fr" if text == "hello" => Ok("bonjour".into()),
                "es" if text == "hello" => Ok("hola".into()),
                "xx" => Err(CapabilityError::Rejected(format!("'{target}' is not a supported language"))),
                _ => Ok(format!("[{target}] {text}")),
            }
        }
    }

    pub struct FakeSummarizer;

    impl Summarizer for FakeSummarizer {
        fn summarize(&self, text: &str, _min: u32, max_length: u32) -> CapabilityResult<String> {
            Ok(text.split_whitespace().take(max_length as usize).collect::<Vec<_>>().join(" "))
        }
    }

    pub struct FakeEntities;

    impl EntityExtractor for FakeEntities {
        fn extract(&self, text: &str) -> CapabilityResult<Vec<Entity>> {
            Ok(text
                .split_whitespace()
                .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
                .map(|w| Entity {
                    text: w.trim_matches(|c: char| !c.is_alphanumeric()).to_string(),
                    label: "PROPN".into(),
                })
                .collect())
        }
    }

    pub struct FakeSpeech;

    impl SpeechSynthesizer for FakeSpeech {
        fn synthesize_to_file(&self, text: &str, path: &Path) -> CapabilityResult<()> {
            std::fs::write(path, text.as_bytes()).map_err(|e| CapabilityError::Unavailable(e.to_string()))
        }
    }

    pub struct FakeCaptioner;

    impl ImageCaptioner for FakeCaptioner {
        fn caption(&self, image: &RgbImage) -> CapabilityResult<String> {
            Ok(format!("a {}x{} picture", image.width(), image.height()))
        }
    }

    pub fn capabilities(audio_dir: &Path) -> Capabilities {
        Capabilities {
            translator: Arc::new(FakeTranslator::new()),
            summarizer: Arc::new(FakeSummarizer),
            sentiment: Arc::new(LexiconScorer::new()),
            entities: Arc::new(FakeEntities),
            speech: Arc::new(FakeSpeech),
            captioner: Arc::new(FakeCaptioner),
            audio_dir: audio_dir.to_path_buf(),
        }
    }
}
