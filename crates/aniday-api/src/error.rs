//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use aniday_anilist::AnilistError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no qualifying anime found within the attempt budget")]
    SelectionFailed,

    #[error("AniList fetch failed: {0}")]
    Anilist(#[from] AnilistError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SelectionFailed | ApiError::Anilist(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Detail goes to the log; the wire body is the fixed message the
        // original service always returned.
        match &self {
            ApiError::SelectionFailed => warn!("{}", self),
            other => error!("{}", other),
        }

        let body = ErrorResponse {
            error: "An error occurred".to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
