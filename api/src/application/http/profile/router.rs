use super::handlers::create_profile::{__path_create_profile, create_profile};
use super::handlers::delete_profile::{__path_delete_profile, delete_profile};
use super::handlers::get_profile::{__path_get_profile, get_profile};
use super::handlers::get_profiles::{__path_get_profiles, get_profiles};
use super::handlers::update_profile::{__path_update_profile, update_profile};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_profiles, get_profile, create_profile, update_profile, delete_profile))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profiles", state.args.server.root_path),
            get(get_profiles).post(create_profile),
        )
        .route(
            &format!("{}/profiles/{{profile_id}}", state.args.server.root_path),
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}
