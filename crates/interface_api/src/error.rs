//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_settlement::SettlementError;
use domain_split::SplitError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<SplitError> for ApiError {
    fn from(err: SplitError) -> Self {
        // All split failures are user-correctable form input
        ApiError::Validation(err.to_string())
    }
}

impl From<SettlementError> for ApiError {
    fn from(err: SettlementError) -> Self {
        match err {
            // Unbalanced balances cannot be produced by valid requests;
            // treat as an invariant violation rather than user error
            SettlementError::UnbalancedInput { .. } => ApiError::Internal(err.to_string()),
            _ => ApiError::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::ParticipantId;

    #[test]
    fn test_split_error_maps_to_validation() {
        let err: ApiError = SplitError::EmptyParticipants.into();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_unbalanced_input_maps_to_internal() {
        let err: ApiError = SettlementError::UnbalancedInput { residual: 7 }.into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn test_unknown_participant_maps_to_validation() {
        let err: ApiError =
            SettlementError::UnknownParticipant(ParticipantId::new()).into();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
