use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::{ports::LLMClient, value_objects::ImageInput},
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    vision_model: String,
    recipe_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

impl GenerationConfig {
    fn json(response_schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiLLMClient {
    pub fn new(api_key: String, vision_model: String, recipe_model: String) -> Self {
        Self {
            api_key,
            vision_model,
            recipe_model,
            client: Client::new(),
        }
    }

    async fn call_gemini_api(
        &self,
        model_name: &str,
        request: GeminiRequest,
    ) -> Result<String, CoreError> {
        let url = format!("{}/models/{}:generateContent", GEMINI_API_BASE, model_name);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model = model_name, "Gemini API request failed: {}", e);
                CoreError::UpstreamCallFailure(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(model = model_name, "Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamCallFailure(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!(model = model_name, "Failed to decode Gemini response: {}", e);
            CoreError::UpstreamParseFailure(format!("Failed to decode LLM response: {}", e))
        })?;

        gemini_response
            .into_text()
            .ok_or_else(|| CoreError::UpstreamParseFailure("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_images(
        &self,
        prompt: String,
        images: Vec<ImageInput>,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let mut parts = Vec::with_capacity(images.len() + 1);
        parts.push(Part::Text { text: prompt });
        parts.extend(images.into_iter().map(|image| Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type,
                data: general_purpose::STANDARD.encode(&image.data),
            },
        }));

        let request = GeminiRequest {
            contents: vec![Content { parts }],
            system_instruction: None,
            generation_config: Some(GenerationConfig::json(response_schema)),
        };

        self.call_gemini_api(&self.vision_model, request).await
    }

    async fn generate_with_text(
        &self,
        system_instruction: Option<String>,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            system_instruction: system_instruction.map(|text| Content {
                parts: vec![Part::Text { text }],
            }),
            generation_config: Some(GenerationConfig::json(response_schema)),
        };

        self.call_gemini_api(&self.recipe_model, request).await
    }
}
