pub mod fake_client;
pub mod gemini_client;

use crate::domain::{
    common::{LLMConfig, LLMProviderKind, entities::app_errors::CoreError},
    llm::{ports::LLMClient, value_objects::ImageInput},
};

use self::{fake_client::FakeLLMClient, gemini_client::GeminiLLMClient};

/// The LLM backend selected at startup.
#[derive(Debug)]
pub enum LLMProvider {
    Gemini(GeminiLLMClient),
    Fake(FakeLLMClient),
}

impl LLMProvider {
    pub fn from_config(config: &LLMConfig) -> Result<Self, CoreError> {
        match config.provider {
            LLMProviderKind::Gemini => {
                if config.gemini_api_key.trim().is_empty() {
                    return Err(CoreError::InvalidConfiguration(
                        "GEMINI_API_KEY must be set when LLM_PROVIDER is gemini".to_string(),
                    ));
                }
                Ok(LLMProvider::Gemini(GeminiLLMClient::new(
                    config.gemini_api_key.clone(),
                    config.gemini_vision_model.clone(),
                    config.gemini_recipe_model.clone(),
                )))
            }
            LLMProviderKind::Fake => {
                tracing::warn!("using the fake LLM provider, replies are canned");
                Ok(LLMProvider::Fake(FakeLLMClient::with_canned_responses()))
            }
        }
    }

    pub fn kind(&self) -> LLMProviderKind {
        match self {
            LLMProvider::Gemini(_) => LLMProviderKind::Gemini,
            LLMProvider::Fake(_) => LLMProviderKind::Fake,
        }
    }
}

impl LLMClient for LLMProvider {
    async fn generate_with_images(
        &self,
        prompt: String,
        images: Vec<ImageInput>,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        match self {
            LLMProvider::Gemini(client) => {
                client
                    .generate_with_images(prompt, images, response_schema)
                    .await
            }
            LLMProvider::Fake(client) => {
                client
                    .generate_with_images(prompt, images, response_schema)
                    .await
            }
        }
    }

    async fn generate_with_text(
        &self,
        system_instruction: Option<String>,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        match self {
            LLMProvider::Gemini(client) => {
                client
                    .generate_with_text(system_instruction, prompt, response_schema)
                    .await
            }
            LLMProvider::Fake(client) => {
                client
                    .generate_with_text(system_instruction, prompt, response_schema)
                    .await
            }
        }
    }
}
