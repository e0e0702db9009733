use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use supomeshi_core::domain::{
    ingredient::{
        entities::IngredientAnalysis, ports::IngredientService,
        value_objects::AnalyzeIngredientsInput,
    },
    llm::value_objects::ImageInput,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
const MAX_IMAGES: usize = 10;
pub const MAX_REQUEST_SIZE: usize = MAX_IMAGE_SIZE * MAX_IMAGES + 1024 * 1024;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeIngredientsResponse {
    pub data: IngredientAnalysis,
}

/// Multipart form accepted by the analysis endpoint. Documentation only.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeIngredientsForm {
    /// Space separated ingredient names.
    pub manual_text: Option<String>,
    /// Repeat once per selected profile.
    pub profile_id: Vec<Uuid>,
    /// Repeat once per photo, 10MB each at most.
    #[schema(value_type = Vec<String>)]
    pub image: Vec<Vec<u8>>,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "ingredient",
    summary = "Analyze ingredients",
    description = "Detects ingredients in photos, merges them with typed names and splits the result into confirmed items and low-confidence suggestions.",
    request_body(content = AnalyzeIngredientsForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeIngredientsResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeIngredientsResponse>, ApiError> {
    let mut input = AnalyzeIngredientsInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "manual_text" => {
                input.manual_text = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read manual_text: {}", e))
                })?;
            }
            "profile_id" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read profile_id: {}", e))
                })?;
                let profile_id = Uuid::parse_str(value.trim())
                    .map_err(|_| ApiError::BadRequest("Invalid profile_id format".to_string()))?;
                input.profile_ids.push(profile_id);
            }
            "image" => {
                if input.images.len() == MAX_IMAGES {
                    return Err(ApiError::BadRequest(format!(
                        "Too many images. At most {} are accepted",
                        MAX_IMAGES
                    )));
                }

                let mime_type = field
                    .content_type()
                    .unwrap_or("image/jpeg")
                    .to_string();
                if !mime_type.starts_with("image/") {
                    return Err(ApiError::BadRequest(format!(
                        "Unsupported image type: {}",
                        mime_type
                    )));
                }

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                input.images.push(ImageInput::new(mime_type, data));
            }
            _ => {}
        }
    }

    let analysis = state
        .service
        .analyze_ingredients(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeIngredientsResponse { data: analysis }))
}
