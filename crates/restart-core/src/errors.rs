//! Error types for Restart

use thiserror::Error;

/// Core errors that can occur in Restart
#[derive(Debug, Error)]
pub enum Error {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Wallet session errors raised by the session controller or its backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Wallet not connected")]
    NotConnected,

    #[error("Wallet already connected")]
    AlreadyConnected,

    #[error("Another wallet operation is in progress")]
    OperationInProgress,

    #[error("Connection rejected by wallet")]
    ConnectionRejected,

    #[error("Wallet unavailable: {reason}")]
    ConnectionUnavailable { reason: String },

    #[error("Wallet operation failed: {message}")]
    OperationFailed { message: String },
}

/// Client-side validation errors for the lock creation form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a whole number")]
    NotANumber { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
    },
}

/// Result type alias for Restart operations
pub type Result<T> = std::result::Result<T, Error>;

impl SessionError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotConnected => "not_connected",
            Self::AlreadyConnected => "already_connected",
            Self::OperationInProgress => "operation_in_progress",
            Self::ConnectionRejected => "connection_rejected",
            Self::ConnectionUnavailable { .. } => "connection_unavailable",
            Self::OperationFailed { .. } => "operation_failed",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotConnected | Self::AlreadyConnected | Self::OperationInProgress => 409,
            Self::ConnectionRejected => 403,
            Self::ConnectionUnavailable { .. } => 503,
            Self::OperationFailed { .. } => 502,
        }
    }
}

impl FormError {
    /// Name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::NotANumber { field }
            | Self::OutOfRange { field, .. } => field,
        }
    }

    pub fn error_code(&self) -> &'static str {
        "invalid_form"
    }

    pub fn status_code(&self) -> u16 {
        400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_codes() {
        let err = SessionError::NotConnected;
        assert_eq!(err.error_code(), "not_connected");
        assert_eq!(err.status_code(), 409);

        let err = SessionError::OperationFailed {
            message: "rpc down".into(),
        };
        assert_eq!(err.error_code(), "operation_failed");
        assert_eq!(err.status_code(), 502);
        assert_eq!(err.to_string(), "Wallet operation failed: rpc down");
    }

    #[test]
    fn test_form_error_names_field() {
        let err = FormError::OutOfRange {
            field: "withdrawalFeeRate",
            min: 0,
            max: 10_000,
        };
        assert_eq!(err.field(), "withdrawalFeeRate");
        assert_eq!(
            err.to_string(),
            "withdrawalFeeRate must be between 0 and 10000"
        );
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_wraps_into_core_error() {
        let err: Error = SessionError::NotConnected.into();
        assert!(matches!(err, Error::Session(SessionError::NotConnected)));
    }
}
