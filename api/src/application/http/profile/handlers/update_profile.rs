use crate::application::http::profile::validators::UpdateProfileValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use supomeshi_core::domain::profile::entities::Profile;
use supomeshi_core::domain::profile::ports::ProfileService;
use supomeshi_core::domain::profile::value_objects::UpdateProfileInput;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    put,
    path = "/{profile_id}",
    tag = "profile",
    summary = "Update profile",
    description = "Changes only the fields present in the body.",
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 404, body = ApiErrorResponse)
    ),
    params(
        ("profile_id" = Uuid, Path, description = "Profile ID"),
    ),
    request_body = UpdateProfileValidator
)]
pub async fn update_profile(
    Path(profile_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let profile = state
        .service
        .update_profile(UpdateProfileInput {
            profile_id,
            name: payload.name,
            age: payload.age,
            exercise_intensity: payload.exercise_intensity,
            difficulty: payload.difficulty,
            disliked_ingredients: payload.disliked_ingredients,
            allergies: payload.allergies,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse { data: profile }))
}
