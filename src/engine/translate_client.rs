use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::engine::capability::{CapabilityResult, Translator};
use crate::engine::error::CapabilityError;
use crate::engine::http::{decode_json, transport_error};

#[derive(Serialize)]
pub struct TranslateRequest<'a> {
    pub q: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub format: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// LibreTranslate-compatible translation backend.
pub struct TranslateClient {
    http: Client,
    endpoint: String,
}

impl TranslateClient {
    pub fn new(http: Client, endpoint: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

impl Translator for TranslateClient {
    fn translate(&self, text: &str, target: &str) -> CapabilityResult<String> {
        if text.trim().is_empty() {
            return Err(CapabilityError::Rejected("nothing to translate".into()));
        }

        let req = TranslateRequest {
            q: text,
            source: "auto",
            target,
            format: "text",
        };

        let resp = self
            .http
            .post(format!("{}/translate", self.endpoint))
            .json(&req)
            .send()
            .map_err(transport_error)?;

        let resp: TranslateResponse = decode_json(resp)?;
        Ok(resp.translated_text)
    }
}
