use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Successful JSON response wrapper.
pub enum Response<T: Serialize> {
    OK(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
        }
    }
}
