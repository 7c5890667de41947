//! Error handling module for the data-access gateway.
//!
//! Provides one error taxonomy shared by every backend, with stable codes for callers
//! that surface failures through their own notification channel.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const AUTHENTICATION_ERROR: &str = "AUTHENTICATION_ERROR";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const SERVER_ERROR: &str = "SERVER_ERROR";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
}

/// Gateway error type.
///
/// A missing entity is never an error: lookups return `Option::None` instead.
#[derive(Debug)]
pub enum GatewayError {
    /// Missing or malformed identifying fields
    Validation(String),
    /// Remote login or signup reported non-success
    Authentication(String),
    /// The request never produced an HTTP response
    Network(String),
    /// The remote API answered with a non-success status
    Server { status: u16, message: String },
    /// The local store could not be read or written
    Storage(String),
    /// A stored document or response body could not be (de)serialized
    Serialization(String),
}

impl GatewayError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Validation(_) => codes::VALIDATION_ERROR,
            GatewayError::Authentication(_) => codes::AUTHENTICATION_ERROR,
            GatewayError::Network(_) => codes::NETWORK_ERROR,
            GatewayError::Server { .. } => codes::SERVER_ERROR,
            GatewayError::Storage(_) => codes::STORAGE_ERROR,
            GatewayError::Serialization(_) => codes::SERIALIZATION_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            GatewayError::Validation(msg) => msg.clone(),
            GatewayError::Authentication(msg) => msg.clone(),
            GatewayError::Network(msg) => msg.clone(),
            GatewayError::Server { status, message } => format!("HTTP {}: {}", status, message),
            GatewayError::Storage(msg) => msg.clone(),
            GatewayError::Serialization(msg) => msg.clone(),
        }
    }

    /// HTTP status carried by a server error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for GatewayError {}

impl From<sqlx::Error> for GatewayError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Store error: {:?}", err);
        GatewayError::Storage(format!("Store error: {}", err))
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        GatewayError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        if err.is_decode() {
            return GatewayError::Serialization(format!("Invalid response body: {}", err));
        }
        match err.status() {
            Some(status) => GatewayError::Server {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => GatewayError::Network(format!("Request failed: {}", err)),
        }
    }
}

/// A specialized Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            GatewayError::Validation("x".into()).error_code(),
            codes::VALIDATION_ERROR
        );
        assert_eq!(
            GatewayError::Authentication("x".into()).error_code(),
            codes::AUTHENTICATION_ERROR
        );
        assert_eq!(
            GatewayError::Server {
                status: 500,
                message: "boom".into()
            }
            .error_code(),
            codes::SERVER_ERROR
        );
    }

    #[test]
    fn test_server_error_display() {
        let err = GatewayError::Server {
            status: 503,
            message: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "SERVER_ERROR: HTTP 503: unavailable");
        assert_eq!(err.status(), Some(503));
        assert_eq!(GatewayError::Network("down".into()).status(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let err: GatewayError = serde_json::from_str::<Vec<u8>>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.error_code(), codes::SERIALIZATION_ERROR);
    }
}
