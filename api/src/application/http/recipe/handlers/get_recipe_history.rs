use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use supomeshi_core::domain::recipe::entities::RecipeHistoryItem;
use supomeshi_core::domain::recipe::ports::RecipeService;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipeHistoryResponse {
    pub data: Vec<RecipeHistoryItem>,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "recipe",
    summary = "Get recipe history",
    description = "Meals generated during the last 30 days, oldest first.",
    responses(
        (status = 200, body = GetRecipeHistoryResponse)
    ),
)]
pub async fn get_recipe_history(
    State(state): State<AppState>,
) -> Result<Response<GetRecipeHistoryResponse>, ApiError> {
    let history = state
        .service
        .get_recipe_history()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeHistoryResponse { data: history }))
}
