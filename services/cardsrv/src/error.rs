//! Service error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, CardsrvError>;

/// Errors surfaced by the voucher service.
#[derive(Debug, Error)]
pub enum CardsrvError {
    /// Requested brand is not in the registry.
    #[error("Not supported")]
    UnknownBrand,

    /// Requested voucher count is outside the accepted range.
    #[error("count must be between 1 and 50, got {0}")]
    InvalidCount(usize),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl CardsrvError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CardsrvError::UnknownBrand => StatusCode::NOT_FOUND,
            CardsrvError::InvalidCount(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CardsrvError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CardsrvError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
