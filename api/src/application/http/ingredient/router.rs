use super::handlers::analyze_ingredients::{
    __path_analyze_ingredients, MAX_REQUEST_SIZE, analyze_ingredients,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_ingredients))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients/analyze", state.args.server.root_path),
            post(analyze_ingredients),
        )
        .layer(DefaultBodyLimit::max(MAX_REQUEST_SIZE))
}
