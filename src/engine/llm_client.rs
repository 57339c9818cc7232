use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::{ImageFormat, RgbImage};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::engine::capability::{CapabilityResult, EntityExtractor, ImageCaptioner, Summarizer};
use crate::engine::entity_decode::decode_entities;
use crate::engine::error::CapabilityError;
use crate::engine::http::{decode_json, transport_error};
use crate::model::node_output::Entity;

#[derive(Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: ChatContent,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum ChatContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Deserialize)]
pub struct ChatMessageResponse {
    pub content: String,
}

const ENTITY_PROMPT: &str = "You are a named-entity recognizer. Return ONLY a JSON array of objects \
with the keys \"text\" and \"label\", one per entity found in the user's text, in order of appearance. \
Use spaCy-style labels such as PERSON, ORG, GPE, LOC, DATE, MONEY, PRODUCT, EVENT. \
Return [] when there are none.";

const CAPTION_PROMPT: &str = "Describe this image in one short sentence.";

/// OpenAI-compatible chat completions client (LM Studio by default).
pub struct LlmClient {
    http: Client,
    endpoint: String,
    model: String,
}

impl LlmClient {
    pub fn new(http: Client, endpoint: &str, model: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    fn chat(&self, messages: Vec<ChatMessage>, temperature: f32) -> CapabilityResult<String> {
        let req = ChatCompletionRequest {
            model: self.model.clone(),
            temperature,
            messages,
        };

        let resp = self
            .http
            .post(format!("{}/chat/completions", self.endpoint))
            .json(&req)
            .send()
            .map_err(transport_error)?;

        let resp: ChatCompletionResponse = decode_json(resp)?;
        resp.choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| CapabilityError::Unavailable("model returned no choices".into()))
    }

    pub fn test_connection(&self) -> anyhow::Result<String> {
        let resp: serde_json::Value = self
            .http
            .get(format!("{}/models", self.endpoint))
            .send()?
            .json()?;

        Ok(format!(
            "Connected ({} models available)",
            resp["data"].as_array().map(|a| a.len()).unwrap_or(0)
        ))
    }
}

fn system(content: &str) -> ChatMessage {
    ChatMessage {
        role: "system".into(),
        content: ChatContent::Text(content.to_string()),
    }
}

fn user(content: &str) -> ChatMessage {
    ChatMessage {
        role: "user".into(),
        content: ChatContent::Text(content.to_string()),
    }
}

pub fn summary_prompt(min_length: u32, max_length: u32) -> String {
    format!(
        "Summarize the user's text in plain prose. Use between {min_length} and {max_length} words. \
         Reply with the summary only."
    )
}

pub fn png_data_url(image: &RgbImage) -> Result<String, CapabilityError> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| CapabilityError::Rejected(format!("could not encode image: {e}")))?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(buf.into_inner())))
}

impl Summarizer for LlmClient {
    fn summarize(&self, text: &str, min_length: u32, max_length: u32) -> CapabilityResult<String> {
        let summary = self.chat(vec![system(&summary_prompt(min_length, max_length)), user(text)], 0.2)?;
        if summary.is_empty() {
            return Err(CapabilityError::Unavailable("model returned an empty summary".into()));
        }
        Ok(summary)
    }
}

impl EntityExtractor for LlmClient {
    fn extract(&self, text: &str) -> CapabilityResult<Vec<Entity>> {
        let raw = self.chat(vec![system(ENTITY_PROMPT), user(text)], 0.0)?;
        decode_entities(&raw).map_err(CapabilityError::Unavailable)
    }
}

impl ImageCaptioner for LlmClient {
    fn caption(&self, image: &RgbImage) -> CapabilityResult<String> {
        let message = ChatMessage {
            role: "user".into(),
            content: ChatContent::Parts(vec![
                ContentPart::Text {
                    text: CAPTION_PROMPT.into(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: png_data_url(image)?,
                    },
                },
            ]),
        };
        self.chat(vec![message], 0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vision_message_serializes_as_content_parts() {
        let msg = ChatMessage {
            role: "user".into(),
            content: ChatContent::Parts(vec![
                ContentPart::Text { text: "hi".into() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: "data:image/png;base64,AAAA".into(),
                    },
                },
            ]),
        };

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][1]["type"], "image_url");
        assert_eq!(json["content"][1]["image_url"]["url"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn plain_message_serializes_as_string() {
        let json = serde_json::to_value(user("hello")).unwrap();
        assert_eq!(json["content"], "hello");
    }

    #[test]
    fn data_url_is_png() {
        let img = RgbImage::from_pixel(2, 2, image::Rgb([255, 0, 0]));
        let url = png_data_url(&img).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));

        let bytes = BASE64.decode(url.trim_start_matches("data:image/png;base64,")).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn summary_prompt_carries_bounds() {
        let p = summary_prompt(10, 50);
        assert!(p.contains("between 10 and 50 words"));
    }
}
