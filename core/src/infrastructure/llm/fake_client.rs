//! Deterministic LLM client for tests and offline runs.

use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::{ports::LLMClient, value_objects::ImageInput},
};

const CANNED_RECIPE: &str = r#"{
    "mealName": "にんじんたっぷり卵焼き定食",
    "mainDish": "にんじんと卵の甘い卵焼き",
    "sideDish": "ほうれん草のおかか和え",
    "soup": "豆腐とわかめの味噌汁",
    "stapleAmount": "子どもの手のひら1.5杯分",
    "cookTime": "約15分",
    "nutrition": { "energy": "約600kcal", "protein": "約25g", "fat": "約18g", "carbs": "約80g" },
    "nutritionistComment": "卵のたんぱく質とにんじんのビタミンAで体づくりを支えます。",
    "shoppingList": ["ほうれん草", "豆腐", "わかめ"],
    "alternativeIngredients": ["ほうれん草の代わりに小松菜"],
    "tipsForKids": "卵を割るところから一緒にやってみましょう。"
}"#;

/// Answers prompts from registered responses.
///
/// A response is chosen when the prompt contains its pattern; patterns are
/// checked in registration order and the first hit wins. Without a hit the
/// default response is used, or the call fails as an upstream error.
#[derive(Debug, Default)]
pub struct FakeLLMClient {
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeLLMClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_string(), response.to_string()));
        self
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Canned replies for running the whole app offline: a short ingredient
    /// list for photos and one fixed dinner menu.
    pub fn with_canned_responses() -> Self {
        Self::new()
            .with_response(
                "食材認識",
                r#"[{"name":"卵","confidence":0.9},{"name":"にんじん","confidence":0.5}]"#,
            )
            .with_response("献立", CANNED_RECIPE)
    }

    /// Number of model calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every prompt received, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn respond(&self, prompt: String) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let response = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone());

        let excerpt: String = prompt.chars().take(100).collect();
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt);

        response.ok_or_else(|| {
            CoreError::UpstreamCallFailure(format!(
                "fake LLM has no response for prompt: {}",
                excerpt
            ))
        })
    }
}

impl LLMClient for FakeLLMClient {
    async fn generate_with_images(
        &self,
        prompt: String,
        _images: Vec<ImageInput>,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.respond(prompt)
    }

    async fn generate_with_text(
        &self,
        _system_instruction: Option<String>,
        prompt: String,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.respond(prompt)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn first_matching_pattern_wins() {
        let client = FakeLLMClient::new()
            .with_response("献立", "recipe")
            .with_response("夕食", "dinner");

        let reply = client
            .generate_with_text(None, "夕食の献立".to_string(), json!({}))
            .await
            .unwrap();

        assert_eq!(reply, "recipe");
        assert_eq!(client.calls(), 1);
        assert_eq!(client.prompts(), vec!["夕食の献立"]);
    }

    #[tokio::test]
    async fn falls_back_to_default_response() {
        let client = FakeLLMClient::new().with_default_response("[]");

        let reply = client
            .generate_with_images("anything".to_string(), vec![], json!({}))
            .await
            .unwrap();

        assert_eq!(reply, "[]");
    }

    #[tokio::test]
    async fn unmatched_prompt_is_an_upstream_failure() {
        let client = FakeLLMClient::new();

        let err = client
            .generate_with_text(None, "hello".to_string(), json!({}))
            .await
            .unwrap_err();

        assert!(err.is_upstream());
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn canned_recipe_is_valid_json() {
        let client = FakeLLMClient::with_canned_responses();

        let reply = client
            .generate_with_text(None, "夕食の献立".to_string(), json!({}))
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(value["mealName"], "にんじんたっぷり卵焼き定食");
    }
}
