use crate::domain::model::ErrorBody;
use reqwest::{Method, StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{method} {url}: {} {}", .status.as_u16(), .body.message())]
    ApiError {
        method: Method,
        url: String,
        status: StatusCode,
        body: ErrorBody,
        raw: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for the `act` binary.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Critical => 3,
        }
    }
}

impl ActError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// HTTP status returned by the engine, if this error came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) => ErrorCategory::Network,
            Self::ApiError { .. } => ErrorCategory::Api,
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::UrlError(_)
            | Self::IoError(_)
            | Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::HttpError(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            Self::ApiError { status, .. } if status.is_server_error() => ErrorSeverity::Medium,
            Self::ApiError { .. } | Self::ValidationError { .. } => ErrorSeverity::High,
            Self::HttpError(_) | Self::SerializationError(_) => ErrorSeverity::High,
            _ => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the engine is reachable and the base URL is correct",
            ErrorCategory::Api => match self.status() {
                Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN) => {
                    "Check that the bearer token is valid and not expired"
                }
                Some(StatusCode::NOT_FOUND) => "Check the resource id",
                _ => "Inspect the engine's error message",
            },
            ErrorCategory::Data => "The engine returned a body that does not match the expected shape",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
            ErrorCategory::Input => "Check the command arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, ActError>;
