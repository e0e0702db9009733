use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::app_state::AppState;
use super::api_entities::response::Response;

/// Public, non-secret runtime settings for the frontend.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub app_version: String,
    pub root_path: String,
    pub llm_provider: String,
    pub persistent_storage: bool,
}

pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    Response::OK(ConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
        llm_provider: state.service.llm_client().kind().as_str().to_string(),
        persistent_storage: state.args.storage.data_dir.is_some(),
    })
}
