//! HTTP route modules
//!
//! - `health` - liveness endpoint
//! - `images` - generation and download proxy under `/api/image`
//! - `user` - development token endpoints under `/api/user`

pub mod health;
pub mod images;
pub mod user;

use actix_web::{HttpResponse, error::InternalError, web};
use serde::Serialize;
use tracing::debug;

/// Standard API response structure
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Flat `{ "error": "..." }` body used by the image and user endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// 400 response carrying this message
    pub fn bad_request(error: impl Into<String>) -> HttpResponse {
        HttpResponse::BadRequest().json(Self::new(error))
    }

    /// 500 response carrying this message
    pub fn internal(error: impl Into<String>) -> HttpResponse {
        HttpResponse::InternalServerError().json(Self::new(error))
    }
}

/// Trimmed, non-empty value of an optional request field
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// JSON extractor configuration; malformed bodies answer 400 `{error}`
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            debug!("Rejected request body: {}", err);
            let response = ErrorBody::bad_request(format!("Invalid request body: {}", err));
            InternalError::from_response(err, response).into()
        })
}

/// Mount every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(images::configure_routes)
        .configure(user::configure_routes);
}
