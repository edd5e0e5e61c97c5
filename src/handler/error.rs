use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

use crate::model::sign;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}, details: {1}")]
    BadRequest(String, String),
    #[error("Server error: {0}`")]
    Server(String),
    #[error("Expired session`")]
    ExpiredSession(),
    #[error("No session`")]
    NoSession(),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg, details) => {
                tracing::warn!("{}: {}", msg, details);
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Server(msg) => {
                tracing::error!("{}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            ApiError::Other(err) => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            ApiError::ExpiredSession() => {
                tracing::error!("Expired session");
                (StatusCode::UNAUTHORIZED, "Session expired".to_string())
            }
            ApiError::NoSession() => {
                tracing::error!("No session");
                (StatusCode::UNAUTHORIZED, "No session".to_string())
            }
        };

        (status, message).into_response()
    }
}

impl From<sign::Error> for ApiError {
    fn from(error: sign::Error) -> Self {
        match error {
            // a tampered or re-keyed cookie is treated as absent
            sign::Error::Malformed() | sign::Error::BadSignature() => ApiError::NoSession(),
            sign::Error::Other(error) => ApiError::Other(error),
        }
    }
}
