//! Unified Provider Error Handling
//!
//! Single error type for image providers.
//!
//! | Variant | Purpose | HTTP Status |
//! |------|------|------------|
//! | Authentication | Authentication failed | 401 |
//! | RateLimit | Rate limit exceeded | 429 |
//! | InvalidRequest | Invalid request | 400 |
//! | ApiError | Any other non-2xx answer | status |
//! | Network | Transport failure | - |
//! | ResponseParsing | Unreadable response body | - |
//! | Configuration | Provider not usable as configured | - |
//! | Timeout | Deadline elapsed | 408 |

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("API error from {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Create authentication error
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    /// Create rate limit error
    pub fn rate_limit(provider: &'static str, message: impl Into<String>) -> Self {
        Self::RateLimit {
            provider,
            message: message.into(),
        }
    }

    /// Create invalid request error
    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    /// Create API error carrying the HTTP status
    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create response parsing error
    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Map a non-success HTTP status to the matching variant
    pub fn from_status(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => Self::invalid_request(provider, message),
            401 | 403 => Self::authentication(provider, message),
            408 => Self::timeout(provider, message),
            429 => Self::rate_limit(provider, message),
            _ => Self::api_error(provider, status, message),
        }
    }

    /// Name of the provider that produced the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::Network { provider, .. }
            | Self::ResponseParsing { provider, .. }
            | Self::Configuration { provider, .. }
            | Self::Timeout { provider, .. } => provider,
        }
    }

    /// Human-readable message without the provider prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message, .. }
            | Self::RateLimit { message, .. }
            | Self::InvalidRequest { message, .. }
            | Self::ApiError { message, .. }
            | Self::Network { message, .. }
            | Self::ResponseParsing { message, .. }
            | Self::Configuration { message, .. }
            | Self::Timeout { message, .. } => message,
        }
    }

    /// Whether the error means the provider did not answer in time
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
