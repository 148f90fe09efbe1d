//! Translation of repository errors into HTTP responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::{DomainError, ErrorCode, ErrorName, ErrorSignal};

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        match self {
            DomainError::Signal(signal) => {
                let status = StatusCode::from_u16(signal.code.as_u16())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Json(signal)).into_response()
            }
            DomainError::Database(e) => {
                tracing::error!("Database error: {}", e);

                let signal = ErrorSignal::new(
                    ErrorName::Database,
                    ErrorCode::InternalServerError,
                    "Database operation failed",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(signal)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_code_becomes_status() {
        let response =
            DomainError::from(ErrorSignal::conflict("Brand already exists")).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = DomainError::from(ErrorSignal::not_found("Brand not found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_is_internal() {
        let response = DomainError::from(sea_orm::DbErr::Custom("gone".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
