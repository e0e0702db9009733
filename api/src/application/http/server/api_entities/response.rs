use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
        }
    }
}
