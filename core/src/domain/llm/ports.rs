use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, llm::value_objects::ImageInput};

/// LLM Client trait for calling AI models.
///
/// Implementations return the model's raw text; parsing it into domain types
/// is the caller's job so that malformed replies surface as
/// [`CoreError::UpstreamParseFailure`].
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_images(
        &self,
        prompt: String,
        images: Vec<ImageInput>,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        system_instruction: Option<String>,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
