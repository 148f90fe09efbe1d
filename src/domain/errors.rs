//! Domain error types
//!
//! Every expected failure of a repository operation is an [`ErrorSignal`]:
//! a taxonomy name, an HTTP-style code, the cause string for that code and a
//! human message. Anything else (the executor failing, a lost connection) is
//! carried through [`DomainError::Database`] untouched.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Closed set of error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorName {
    Query,
    Connection,
    Transaction,
    DuplicateEntry,
    Constraint,
    NullValue,
    DataIntegrity,
    InvalidQuery,
    Timeout,
    Unavailable,
    LockTimeout,
    Authentication,
    Authorization,
    AccessDenied,
    Server,
    Network,
    InvalidState,
    InvalidArgument,
    MissingParameter,
    UnsupportedOperation,
    Parse,
    InvalidDataFormat,
    Validation,
    ConstraintViolation,
    ResourceNotFound,
    UnexpectedResponse,
    UnexpectedResult,
    Database,
    Io,
    FileNotFound,
    ConnectionTimeout,
    DataConversion,
    UnsupportedDatabase,
}

impl ErrorName {
    pub fn label(self) -> &'static str {
        match self {
            ErrorName::Query => "Query Error",
            ErrorName::Connection => "Connection Error",
            ErrorName::Transaction => "Transaction Error",
            ErrorName::DuplicateEntry => "Duplicate Entry Error",
            ErrorName::Constraint => "Constraint Error",
            ErrorName::NullValue => "Null Value Error",
            ErrorName::DataIntegrity => "Data Integrity Error",
            ErrorName::InvalidQuery => "Invalid Query Error",
            ErrorName::Timeout => "Timeout Error",
            ErrorName::Unavailable => "Unavailable Error",
            ErrorName::LockTimeout => "Lock Timeout Error",
            ErrorName::Authentication => "Authentication Error",
            ErrorName::Authorization => "Authorization Error",
            ErrorName::AccessDenied => "Access Denied Error",
            ErrorName::Server => "Server Error",
            ErrorName::Network => "Network Error",
            ErrorName::InvalidState => "Invalid State Error",
            ErrorName::InvalidArgument => "Invalid Argument Error",
            ErrorName::MissingParameter => "Missing Parameter Error",
            ErrorName::UnsupportedOperation => "Unsupported Operation Error",
            ErrorName::Parse => "Parse Error",
            ErrorName::InvalidDataFormat => "Invalid Data Format Error",
            ErrorName::Validation => "Validation Error",
            ErrorName::ConstraintViolation => "Constraint Violation Error",
            ErrorName::ResourceNotFound => "Resource Not Found Error",
            ErrorName::UnexpectedResponse => "Unexpected Response Error",
            ErrorName::UnexpectedResult => "Unexpected Result Error",
            ErrorName::Database => "Database Error",
            ErrorName::Io => "IO Error",
            ErrorName::FileNotFound => "File Not Found Error",
            ErrorName::ConnectionTimeout => "Connection Timeout Error",
            ErrorName::DataConversion => "Data Conversion Error",
            ErrorName::UnsupportedDatabase => "Unsupported Database Error",
        }
    }
}

impl fmt::Display for ErrorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ErrorName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Numeric status codes, HTTP semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    RequestTimeout,
    Conflict,
    UnprocessableEntity,
    InternalServerError,
    NotImplemented,
    ServiceUnavailable,
    GatewayTimeout,
}

impl ErrorCode {
    pub fn as_u16(self) -> u16 {
        match self {
            ErrorCode::BadRequest => 400,
            ErrorCode::Unauthorized => 401,
            ErrorCode::Forbidden => 403,
            ErrorCode::NotFound => 404,
            ErrorCode::RequestTimeout => 408,
            ErrorCode::Conflict => 409,
            ErrorCode::UnprocessableEntity => 422,
            ErrorCode::InternalServerError => 500,
            ErrorCode::NotImplemented => 501,
            ErrorCode::ServiceUnavailable => 503,
            ErrorCode::GatewayTimeout => 504,
        }
    }

    /// The short cause string attached to every signal carrying this code.
    pub fn cause(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "Bad Request",
            ErrorCode::Unauthorized => "Unauthorized",
            ErrorCode::Forbidden => "Forbidden",
            ErrorCode::NotFound => "Not Found",
            ErrorCode::RequestTimeout => "Request Timeout",
            ErrorCode::Conflict => "Conflict",
            ErrorCode::UnprocessableEntity => "Unprocessable Entity",
            ErrorCode::InternalServerError => "Internal Server Error",
            ErrorCode::NotImplemented => "Not Implemented",
            ErrorCode::ServiceUnavailable => "Service Unavailable",
            ErrorCode::GatewayTimeout => "Gateway Timeout",
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.as_u16())
    }
}

/// Typed failure raised by validation, lookup and conflict checks.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{name}: {message}")]
pub struct ErrorSignal {
    pub name: ErrorName,
    pub code: ErrorCode,
    pub cause: &'static str,
    pub message: String,
}

impl ErrorSignal {
    pub fn new(name: ErrorName, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            name,
            code,
            cause: code.cause(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorName::Query, ErrorCode::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorName::Query, ErrorCode::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorName::Query, ErrorCode::Conflict, message)
    }
}

impl Default for ErrorSignal {
    fn default() -> Self {
        Self::new(
            ErrorName::Server,
            ErrorCode::InternalServerError,
            "Unknown error",
        )
    }
}

/// Error returned by every repository operation.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Expected failure: bad input, missing row, conflicting row
    #[error(transparent)]
    Signal(#[from] ErrorSignal),
    /// Executor failure, passed through as raised
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl DomainError {
    /// The signal carried by this error, if it is an expected failure.
    pub fn signal(&self) -> Option<&ErrorSignal> {
        match self {
            DomainError::Signal(signal) => Some(signal),
            DomainError::Database(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_follows_code() {
        let signal = ErrorSignal::conflict("Brand already exists");
        assert_eq!(signal.name, ErrorName::Query);
        assert_eq!(signal.code.as_u16(), 409);
        assert_eq!(signal.cause, "Conflict");
        assert_eq!(signal.to_string(), "Query Error: Brand already exists");
    }

    #[test]
    fn test_default_signal_is_server_error() {
        let signal = ErrorSignal::default();
        assert_eq!(signal.name.label(), "Server Error");
        assert_eq!(signal.code, ErrorCode::InternalServerError);
        assert_eq!(signal.message, "Unknown error");
    }

    #[test]
    fn test_signal_serializes_as_flat_body() {
        let signal = ErrorSignal::not_found("Image not found");
        let json = serde_json::to_value(&signal).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Query Error",
                "code": 404,
                "cause": "Not Found",
                "message": "Image not found"
            })
        );
    }

    #[test]
    fn test_database_error_is_not_a_signal() {
        let err = DomainError::from(sea_orm::DbErr::Custom("socket closed".into()));
        assert!(err.signal().is_none());
        assert!(err.to_string().contains("socket closed"));
    }
}
