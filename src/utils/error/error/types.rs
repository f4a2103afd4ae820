//! Error types for the Gateway

use crate::core::providers::ProviderError;
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Provider errors
    #[error("Provider error: {0}")]
    Provider(ProviderError),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Remote fetch errors (download proxy, storage mirroring)
    #[error("Network error: {0}")]
    Network(String),

    /// Object storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Object storage is not configured
    #[error("Object storage is not configured")]
    StorageDisabled,

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
