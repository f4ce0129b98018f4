//! Gemini generateContent client
//!
//! Thin typed wrapper over the `models/{model}:generateContent` endpoint.
//! Higher-level operations (plan drafts, study content, diagrams) live in
//! the `planner` and `content` modules and go through [`GeminiClient::generate`].

use lumina_core::config::GeneratorConfig;
use lumina_core::Secrets;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{Error, Result};

/// Gemini API client
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    /// Create a client from generator configuration
    ///
    /// API key is loaded from (in priority order):
    /// 1. GEMINI_API_KEY environment variable
    /// 2. ~/.config/lumina/secrets.toml
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let secrets = Secrets::load().map_err(|e| Error::Auth(e.to_string()))?;

        let api_key = secrets.gemini_api_key().ok_or_else(|| {
            Error::Auth(
                "Gemini API key not found. Set GEMINI_API_KEY environment variable \
                 or add the key to ~/.config/lumina/secrets.toml"
                    .to_string(),
            )
        })?;

        Ok(Self::with_api_key(config, api_key))
    }

    /// Create a client with an explicit API key
    pub fn with_api_key(config: &GeneratorConfig, api_key: impl Into<String>) -> Self {
        info!(
            text_model = %config.text_model,
            image_model = %config.image_model,
            "Created Gemini client"
        );

        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        }
    }

    /// Model used for text generation
    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    /// Model used for image generation
    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    /// Issue one generateContent call against the given model
    pub(crate) async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        debug!(model = %model, "Sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, "Gemini API error");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

/// Request body for generateContent
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Plain text prompt with no output constraints
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.into()),
                    inline_data: None,
                }],
            }],
            generation_config: None,
        }
    }

    /// Constrain the response to JSON matching the given schema
    pub fn with_json_schema(mut self, schema: serde_json::Value) -> Self {
        self.generation_config = Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
        });
        self
    }
}

/// Output constraints for a generateContent call
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

/// One message in a request or response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single content part: text or an inline binary payload
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Base64-encoded binary payload with its mime type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Response body for generateContent
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One response candidate
#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if any
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// First inline binary payload of the first candidate, if any
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request =
            GenerateContentRequest::text("hello").with_json_schema(serde_json::json!({
                "type": "OBJECT"
            }));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_plain_text_request_omits_generation_config() {
        let json = serde_json::to_value(GenerateContentRequest::text("hi")).unwrap();
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_response_first_text() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "part one "}, {"text": "part two"}]}
            }]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text().unwrap(), "part one part two");
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
        assert!(response.first_inline_data().is_none());
    }

    #[test]
    fn test_response_inline_data() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [
                    {"text": "here is your diagram"},
                    {"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}
                ]}
            }]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let inline = response.first_inline_data().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "aGVsbG8=");
    }

    #[test]
    fn test_with_api_key_trims_base_url_slash() {
        let mut config = GeneratorConfig::default();
        config.base_url = "http://localhost:9999/v1beta/".to_string();

        let client = GeminiClient::with_api_key(&config, "key");
        assert_eq!(client.base_url, "http://localhost:9999/v1beta");
    }
}
