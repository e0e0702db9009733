use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use supomeshi_core::domain::common::entities::app_errors::CoreError;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

const UPSTREAM_FAILURE_MESSAGE: &str = "AI request failed, please retry";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "E_NOT_FOUND"),
            ApiError::UnprocessableEntity(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_UNPROCESSABLE_ENTITY")
            }
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_UPSTREAM"),
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidRequest(message) => ApiError::BadRequest(message),
            CoreError::AllIngredientsExcluded => ApiError::UnprocessableEntity(
                "All confirmed ingredients are excluded by the selected profiles".to_string(),
            ),
            CoreError::UpstreamParseFailure(_) | CoreError::UpstreamCallFailure(_) => {
                error!("AI collaborator failed: {}", error);
                ApiError::BadGateway(UPSTREAM_FAILURE_MESSAGE.to_string())
            }
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::StorageError(_)
            | CoreError::InvalidConfiguration(_)
            | CoreError::InternalServerError => {
                error!("Request failed: {}", error);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string().replace('\n', ", ")))?;

        Ok(ValidateJson(value))
    }
}
