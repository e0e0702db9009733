use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    common::entities::app_errors::CoreError, ingredient::entities::IngredientObservation,
};

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?").expect("code fence pattern is valid"));

/// Removes Markdown code fences the model sometimes wraps around JSON.
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE.replace_all(raw.trim(), "").trim().to_string()
}

/// Parses the vision model's reply into ingredient observations.
///
/// The reply must be a JSON array of `{ "name", "confidence" }` objects.
/// Confidence values are trusted as given.
pub fn parse_vision_response(raw: &str) -> Result<Vec<IngredientObservation>, CoreError> {
    let cleaned = strip_code_fences(raw);

    let parsed: serde_json::Value = serde_json::from_str(&cleaned).map_err(|e| {
        tracing::error!(response = %cleaned, "Failed to parse vision response: {}", e);
        CoreError::UpstreamParseFailure(format!("Failed to parse vision response: {}", e))
    })?;

    if !parsed.is_array() {
        tracing::error!(response = %cleaned, "Vision response is not an array");
        return Err(CoreError::UpstreamParseFailure(
            "Vision response is not an array".to_string(),
        ));
    }

    serde_json::from_value(parsed).map_err(|e| {
        tracing::error!(response = %cleaned, "Invalid ingredient format: {}", e);
        CoreError::UpstreamParseFailure(format!("Invalid ingredient format: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_array() {
        let parsed =
            parse_vision_response(r#"[{"name":"玉ねぎ","confidence":0.9}]"#).unwrap();
        assert_eq!(parsed, vec![IngredientObservation::new("玉ねぎ", 0.9)]);
    }

    #[test]
    fn parse_fenced_array() {
        let raw = "```json\n[{\"name\": \"にんじん\", \"confidence\": 0.75},\n {\"name\": \"しいたけ\", \"confidence\": 0.4}]\n```";
        let parsed = parse_vision_response(raw).unwrap();
        assert_eq!(
            parsed,
            vec![
                IngredientObservation::new("にんじん", 0.75),
                IngredientObservation::new("しいたけ", 0.4),
            ]
        );
    }

    #[test]
    fn parse_empty_array() {
        assert!(parse_vision_response("[]").unwrap().is_empty());
    }

    #[test]
    fn object_reply_is_rejected() {
        let err = parse_vision_response(r#"{"name":"卵","confidence":1}"#).unwrap_err();
        assert!(matches!(err, CoreError::UpstreamParseFailure(_)));
    }

    #[test]
    fn prose_reply_is_rejected() {
        let err = parse_vision_response("画像に食材が見つかりませんでした。").unwrap_err();
        assert!(matches!(err, CoreError::UpstreamParseFailure(_)));
    }

    #[test]
    fn missing_confidence_is_rejected() {
        let err = parse_vision_response(r#"[{"name":"卵"}]"#).unwrap_err();
        assert!(matches!(err, CoreError::UpstreamParseFailure(_)));
    }
}
