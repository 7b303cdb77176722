//! Error types for ghteams

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for ghteams operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to log into GitHub: {0}")]
    Login(ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

impl Error {
    /// Short name of the error kind, shown alongside unclassified failures.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Api(api) => api.kind(),
            Error::Login(_) => "LoginError",
            Error::Config(_) => "ConfigError",
            Error::Io(_) => "IoError",
            Error::Prompt(_) => "PromptError",
        }
    }
}

/// Errors returned by the GitHub API layer
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the admin username and password or token.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Resets in {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "Unauthorized",
            ApiError::Forbidden => "Forbidden",
            ApiError::NotFound(_) => "NotFound",
            ApiError::RateLimit(_) => "RateLimit",
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::ServerError(_) => "ServerError",
            ApiError::Network(_) => "NetworkError",
            ApiError::InvalidResponse(_) => "InvalidResponse",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Settings-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse settings: {0}")]
    ParseError(String),

    #[error("No org names are found in {}", .0.display())]
    NoOrgs(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
