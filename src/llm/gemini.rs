use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StylistError;
use crate::llm::client::TextGenerator;

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Blocking client for the Gemini `generateContent` endpoint.
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Value>,
}

impl TextGenerator for GeminiBackend {
    fn generate(&self, prompt: &str) -> Result<String, StylistError> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        let payload = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
        };

        tracing::debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "calling Gemini"
        );
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&payload)
            .send()?;

        let status = response.status();
        tracing::debug!(%status, "Gemini responded");
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(StylistError::transport(format!("HTTP {status}: {}", body.trim())));
        }

        let value: GenerateContentResponse = response.json()?;
        extract_output_text(&value.candidates)
            .ok_or_else(|| StylistError::transport("missing output text from Gemini response"))
    }
}

// Joins the text parts of the first candidate.
fn extract_output_text(candidates: &[Value]) -> Option<String> {
    let parts = candidates.first()?.get("content")?.get("parts")?.as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|v| v.as_str()))
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
