//! HTTP response handling for errors

use super::types::GatewayError;
use crate::core::providers::ProviderError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl GatewayError {
    /// Map the error to an HTTP status, a stable error code and a client-facing message
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            GatewayError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            GatewayError::Auth(_) | GatewayError::Jwt(_) => {
                (StatusCode::UNAUTHORIZED, "AUTH_ERROR", self.to_string())
            }
            GatewayError::Provider(provider_error) => match provider_error {
                ProviderError::RateLimit { .. } => (
                    StatusCode::TOO_MANY_REQUESTS,
                    "PROVIDER_RATE_LIMIT",
                    provider_error.to_string(),
                ),
                ProviderError::InvalidRequest { .. } => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_REQUEST",
                    provider_error.to_string(),
                ),
                ProviderError::Authentication { .. } => (
                    StatusCode::UNAUTHORIZED,
                    "PROVIDER_AUTH_ERROR",
                    provider_error.to_string(),
                ),
                _ => (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    provider_error.to_string(),
                ),
            },
            GatewayError::Timeout(_) => (
                StatusCode::GATEWAY_TIMEOUT,
                "TIMEOUT",
                self.to_string(),
            ),
            GatewayError::Network(_) | GatewayError::HttpClient(_) => (
                StatusCode::BAD_GATEWAY,
                "NETWORK_ERROR",
                self.to_string(),
            ),
            GatewayError::Storage(_) => (
                StatusCode::BAD_GATEWAY,
                "STORAGE_ERROR",
                self.to_string(),
            ),
            GatewayError::StorageDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORAGE_DISABLED",
                self.to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = self.classify();

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}
