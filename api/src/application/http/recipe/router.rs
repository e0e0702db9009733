use super::handlers::generate_omakase_recipe::{
    __path_generate_omakase_recipe, generate_omakase_recipe,
};
use super::handlers::generate_recipe::{__path_generate_recipe, generate_recipe};
use super::handlers::get_recipe_history::{__path_get_recipe_history, get_recipe_history};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, generate_omakase_recipe, get_recipe_history))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/generate", state.args.server.root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/recipes/omakase", state.args.server.root_path),
            post(generate_omakase_recipe),
        )
        .route(
            &format!("{}/recipes/history", state.args.server.root_path),
            get(get_recipe_history),
        )
}
