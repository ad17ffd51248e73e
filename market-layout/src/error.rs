use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Reasons a layout request is refused before any market is resolved.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("too many markets in one request: {count} > {limit}")]
    TooManyMarkets { count: usize, limit: usize },

    #[error("market '{market}' has too many outcomes: {count} > {limit}")]
    TooManyOutcomes {
        market: String,
        count: usize,
        limit: usize,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::TooManyMarkets { .. } | ApiError::TooManyOutcomes { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
