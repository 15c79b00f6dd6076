//! Error types for the omx exchange clients.
//!
//! Uses `thiserror` for public API error types. Every remote call resolves to
//! one of three categories: an invalid parameter, an authorization failure, or
//! a property-server failure. Configuration problems get their own branch so
//! that they never masquerade as remote errors.

use std::collections::BTreeMap;
use std::fmt;

/// Top-level error type for the omx libraries.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameterError),

    #[error("User not authorized: {0}")]
    NotAuthorized(#[from] NotAuthorizedError),

    #[error("Property server error: {0}")]
    PropertyServer(#[from] PropertyServerError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Coarse category of an [`ExchangeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParameter,
    NotAuthorized,
    PropertyServer,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::InvalidParameter => "invalid-parameter",
            ErrorKind::NotAuthorized => "not-authorized",
            ErrorKind::PropertyServer => "property-server",
            ErrorKind::Config => "config",
        };
        f.write_str(label)
    }
}

impl ExchangeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExchangeError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            ExchangeError::NotAuthorized(_) => ErrorKind::NotAuthorized,
            ExchangeError::PropertyServer(_) => ErrorKind::PropertyServer,
            ExchangeError::Config(_) => ErrorKind::Config,
        }
    }

    /// The failure details reported by the server, when the error came from
    /// a response envelope.
    pub fn server_failure(&self) -> Option<&ServerFailure> {
        match self {
            ExchangeError::InvalidParameter(InvalidParameterError::Rejected { failure, .. })
            | ExchangeError::NotAuthorized(NotAuthorizedError::Rejected { failure, .. })
            | ExchangeError::PropertyServer(PropertyServerError::Rejected { failure, .. }) => {
                Some(failure)
            }
            _ => None,
        }
    }

    /// Shorthand for a missing or blank parameter.
    pub fn missing(parameter: &str, method: &str) -> Self {
        ExchangeError::InvalidParameter(InvalidParameterError::Missing {
            parameter: parameter.to_string(),
            method: method.to_string(),
        })
    }
}

/// Details copied out of a failed response envelope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerFailure {
    pub http_code: u16,
    pub exception_class: Option<String>,
    pub message_id: Option<String>,
    pub message: Option<String>,
    pub caused_by: Option<String>,
    pub action_description: Option<String>,
    pub system_action: Option<String>,
    pub user_action: Option<String>,
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl fmt::Display for ServerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message_id, &self.message) {
            (Some(id), Some(msg)) => write!(f, "{} {}", id, msg),
            (None, Some(msg)) => f.write_str(msg),
            _ => match &self.exception_class {
                Some(class) => write!(f, "{} (HTTP {})", class, self.http_code),
                None => write!(f, "HTTP {}", self.http_code),
            },
        }
    }
}

/// Client-side validation failures and parameter rejections from the server.
#[derive(Debug, thiserror::Error)]
pub enum InvalidParameterError {
    #[error("The {parameter} parameter passed to {method} is missing or empty")]
    Missing { parameter: String, method: String },

    #[error(
        "The {parameter} value '{value}' passed to {method} is not a valid search string: {reason}"
    )]
    InvalidSearchString {
        parameter: String,
        method: String,
        value: String,
        reason: String,
    },

    #[error("{method} was rejected by the server: {failure}")]
    Rejected {
        method: String,
        failure: ServerFailure,
    },
}

/// Authorization failures.
#[derive(Debug, thiserror::Error)]
pub enum NotAuthorizedError {
    #[error("{method} was refused by the server: {failure}")]
    Rejected {
        method: String,
        failure: ServerFailure,
    },

    #[error("{method} was refused with HTTP status {status}")]
    HttpStatus { method: String, status: u16 },
}

/// Failures in reaching the server or in the server itself.
#[derive(Debug, thiserror::Error)]
pub enum PropertyServerError {
    #[error("{method} could not reach the server: {message}")]
    Transport { method: String, message: String },

    #[error("{method} could not encode its request body: {message}")]
    RequestEncode { method: String, message: String },

    #[error("{method} received a response that could not be parsed: {message}")]
    ResponseParse { method: String, message: String },

    #[error("{method} received an empty response")]
    EmptyResponse { method: String },

    #[error("{method} failed on the server: {failure}")]
    Rejected {
        method: String,
        failure: ServerFailure,
    },

    #[error("{method} failed with HTTP status {status}: {body}")]
    HttpStatus {
        method: String,
        status: u16,
        body: String,
    },
}

/// Errors from the configuration system.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Environment variable not set: {var}")]
    EnvVarMissing { var: String },

    #[error("HTTP client could not be built: {message}")]
    HttpClient { message: String },
}

/// A type alias for results using the top-level `ExchangeError`.
pub type Result<T> = std::result::Result<T, ExchangeError>;
