use crate::application::http::recipe::validators::GenerateOmakaseRecipeValidator;
use crate::application::http::recipe::handlers::generate_recipe::GenerateRecipeResponse;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use supomeshi_core::domain::recipe::ports::RecipeService;
use supomeshi_core::domain::recipe::value_objects::GenerateOmakaseRecipeInput;

#[utoipa::path(
    post,
    path = "/omakase",
    tag = "recipe",
    summary = "Generate recipe without ingredients",
    description = "Lets the model choose seasonal, everyday ingredients. Profiles are optional.",
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = GenerateOmakaseRecipeValidator
)]
pub async fn generate_omakase_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateOmakaseRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let generated = state
        .service
        .generate_omakase_recipe(GenerateOmakaseRecipeInput {
            profile_ids: payload.profile_ids,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipeResponse { data: generated }))
}
