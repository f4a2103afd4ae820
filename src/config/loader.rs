//! Environment overrides
//!
//! Applied after the YAML file so deployments can inject secrets without
//! editing it.

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl GatewayConfig {
    /// Overlay values from environment variables onto this configuration
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Overlay values produced by `lookup`; empty values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // Server configuration
        if let Some(host) = get("GATEWAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("GATEWAY_PORT") {
            self.server.port = parse("GATEWAY_PORT", &port)?;
        }

        // Provider configuration
        if let Some(key) = get("OPENAI_API_KEY") {
            self.provider.api_key = Some(key);
        }
        if let Some(base) = get("OPENAI_API_BASE") {
            self.provider.api_base = base;
        }
        if let Some(timeout) = get("IMAGE_TIMEOUT_SECS") {
            self.provider.timeout = parse("IMAGE_TIMEOUT_SECS", &timeout)?;
        }

        // Storage configuration
        if let Some(url) = get("SUPABASE_URL") {
            self.storage.supabase_url = Some(url);
        }
        if let Some(key) = get("SUPABASE_SERVICE_ROLE_KEY") {
            self.storage.service_role_key = Some(key);
        }
        if let Some(bucket) = get("SUPABASE_BUCKET") {
            self.storage.bucket = bucket;
        }
        if let Some(timeout) = get("STORAGE_TIMEOUT_SECS") {
            self.storage.timeout = parse("STORAGE_TIMEOUT_SECS", &timeout)?;
        }

        if let Some(dir) = get("UPLOADS_DIR") {
            self.uploads.dir = dir;
        }

        if let Some(secret) = get("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }

        if let Some(level) = get("LOG_LEVEL") {
            self.logging.level = level;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", key, e)))
}
