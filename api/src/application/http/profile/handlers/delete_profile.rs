use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use supomeshi_core::domain::profile::ports::ProfileService;
use supomeshi_core::domain::profile::value_objects::DeleteProfileInput;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteProfileResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{profile_id}",
    tag = "profile",
    summary = "Delete profile",
    responses(
        (status = 200, body = DeleteProfileResponse),
        (status = 404, body = ApiErrorResponse)
    ),
    params(
        ("profile_id" = Uuid, Path, description = "Profile ID"),
    ),
)]
pub async fn delete_profile(
    Path(profile_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteProfileResponse>, ApiError> {
    state
        .service
        .delete_profile(DeleteProfileInput { profile_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteProfileResponse {
        message: "Profile deleted successfully".to_string(),
    }))
}
