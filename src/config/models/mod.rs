//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod auth;
pub mod gateway;
pub mod logging;
pub mod provider;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use auth::*;
pub use gateway::*;
pub use logging::*;
pub use provider::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default provider timeout in seconds
pub fn default_provider_timeout() -> u64 {
    30
}

pub fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_model() -> String {
    "dall-e-3".to_string()
}

pub fn default_size() -> String {
    "1024x1024".to_string()
}

pub fn default_quality() -> String {
    "standard".to_string()
}

pub fn default_style() -> String {
    "vivid".to_string()
}

pub fn default_bucket() -> String {
    "openai-images".to_string()
}

pub fn default_object_prefix() -> String {
    "openai".to_string()
}

pub fn default_signed_url_ttl() -> u64 {
    3600 // 1 hour
}

pub fn default_storage_timeout() -> u64 {
    30
}

pub fn default_uploads_dir() -> String {
    "uploads".to_string()
}

pub fn default_uploads_public_path() -> String {
    "/uploads".to_string()
}

pub fn default_jwt_expiration() -> u64 {
    3600 // 1 hour
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
