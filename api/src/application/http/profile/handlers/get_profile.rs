use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use supomeshi_core::domain::profile::entities::Profile;
use supomeshi_core::domain::profile::ports::ProfileService;
use supomeshi_core::domain::profile::value_objects::GetProfileInput;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    get,
    path = "/{profile_id}",
    tag = "profile",
    summary = "Get profile",
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 404, body = ApiErrorResponse)
    ),
    params(
        ("profile_id" = Uuid, Path, description = "Profile ID"),
    ),
)]
pub async fn get_profile(
    Path(profile_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(GetProfileInput { profile_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: profile }))
}
