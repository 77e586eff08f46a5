use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    UnitUnavailable(String),
    #[error("{0}")]
    NoRateConfigured(String),
    #[error("insufficient balance: {required} credits required, {balance} available")]
    InsufficientBalance { required: i64, balance: i64 },
    #[error("the requested slot was booked by a concurrent request; re-check availability and retry")]
    SlotAlreadyBooked,
    #[error("storage conflict unrelated to the slot; safe to retry")]
    TransientStorage,
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error(transparent)]
    SpecificOperationError(sqlx::Error),
    #[error(transparent)]
    TransactionError(sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_)
            | AppError::UnitUnavailable(_)
            | AppError::NoRateConfigured(_)
            | AppError::InsufficientBalance { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SlotAlreadyBooked => StatusCode::CONFLICT,
            AppError::TransientStorage => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NoRowsAffectedError(_)
            | AppError::SpecificOperationError(_)
            | AppError::TransactionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
        } else {
            tracing::warn!(
                error.cause_chain = ?self,
                error.message = %self,
                "client error happened"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}
