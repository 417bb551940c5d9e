use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use tagfeed_core::{AggregateError, InvalidParam};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("tags parameter is missing or empty.")]
    MissingTags,
    #[error(transparent)]
    InvalidParam(#[from] InvalidParam),
    #[error(transparent)]
    Upstream(#[from] AggregateError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingTags | ApiError::InvalidParam(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            // Internal detail stays in the log; the caller gets a fixed body.
            ApiError::Upstream(err) => {
                error!(error = %err, "post aggregation failed");
                (StatusCode::BAD_GATEWAY, "upstream request failed.".to_owned())
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
