use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use supomeshi_core::domain::profile::entities::Profile;
use supomeshi_core::domain::profile::ports::ProfileService;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfilesResponse {
    pub data: Vec<Profile>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "List profiles",
    description = "Returns every registered child profile in creation order.",
    responses(
        (status = 200, body = GetProfilesResponse)
    ),
)]
pub async fn get_profiles(
    State(state): State<AppState>,
) -> Result<Response<GetProfilesResponse>, ApiError> {
    let profiles = state
        .service
        .list_profiles()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfilesResponse { data: profiles }))
}
