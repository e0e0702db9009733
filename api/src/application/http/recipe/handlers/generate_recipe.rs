use crate::application::http::recipe::validators::GenerateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::Serialize;
use supomeshi_core::domain::recipe::entities::GeneratedRecipe;
use supomeshi_core::domain::recipe::ports::RecipeService;
use supomeshi_core::domain::recipe::value_objects::GenerateRecipeInput;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GenerateRecipeResponse {
    pub data: GeneratedRecipe,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate recipe",
    description = "Removes every ingredient a selected profile dislikes or is allergic to, then asks the model for a dinner menu built from what remains.",
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 422, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let generated = state
        .service
        .generate_recipe(GenerateRecipeInput {
            profile_ids: payload.profile_ids,
            confirmed_ingredients: payload.confirmed_ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipeResponse { data: generated }))
}
