use crate::domain::prelude::*;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the HTTP endpoints.
///
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request body is not a valid receipt")]
    InvalidReceipt,

    #[error("receipt processing failed with error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("points for receipt id {0} could not be located")]
    NotFound(String),
}

#[derive(Serialize, Debug)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidReceipt | Self::Scoring(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_kinds_to_status_codes() {
        assert_eq!(ApiError::InvalidReceipt.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(ScoringError::InvalidTime("1F:01".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("abc".to_string()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn scoring_errors_keep_the_offending_input() {
        let err = ApiError::from(ScoringError::InvalidDate("2019-11-1300".to_string()));
        assert_eq!(
            err.to_string(),
            "receipt processing failed with error: purchase date 2019-11-1300 is not a valid date"
        );
    }
}
