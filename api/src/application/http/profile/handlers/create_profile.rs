use crate::application::http::profile::validators::CreateProfileValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use supomeshi_core::domain::profile::entities::Profile;
use supomeshi_core::domain::profile::ports::ProfileService;
use supomeshi_core::domain::profile::value_objects::CreateProfileInput;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    post,
    path = "",
    tag = "profile",
    summary = "Create profile",
    description = "Registers a child with their age, training load, preferred recipe difficulty and dietary exclusions.",
    responses(
        (status = 201, body = CreateProfileResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = CreateProfileValidator
)]
pub async fn create_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProfileValidator>,
) -> Result<Response<CreateProfileResponse>, ApiError> {
    let profile = state
        .service
        .create_profile(CreateProfileInput {
            name: payload.name,
            age: payload.age,
            exercise_intensity: payload.exercise_intensity,
            difficulty: payload.difficulty,
            disliked_ingredients: payload.disliked_ingredients,
            allergies: payload.allergies,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateProfileResponse { data: profile }))
}
