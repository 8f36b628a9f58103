use app_extractor::ExtractorError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Wire shape of every failure: `{"error": "<message>"}`.
///
/// Internal error detail is logged at the boundary, never serialized.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type AppResult<TData> = Result<TData, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("URL is required")]
    MissingUrl,
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    Extractor(#[from] ExtractorError),
    #[error("No downloadable formats found")]
    NoFormats,
    #[error("Not found")]
    NotFound,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

const MSG_UNEXPECTED: &str = "An unexpected error occurred.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingUrl => (StatusCode::BAD_REQUEST, self.to_string()),

            Self::Json(rejection) => (rejection.status(), rejection.body_text()),

            Self::Extractor(err) if err.is_fetch_failure() => {
                error!("Extraction failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not process video. Check the URL or try again.".to_string(),
                )
            }
            Self::Extractor(err) => {
                error!("Extractor failed unexpectedly: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_UNEXPECTED.to_string())
            }

            Self::NoFormats => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),

            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),

            Self::Unexpected(err) => {
                error!("Unexpected error: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_UNEXPECTED.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
