//! Configuration validators
//!
//! Validation implementations for each section of the gateway configuration.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};

/// Longest accepted access token lifetime (one year)
const MAX_JWT_EXPIRATION: u64 = 365 * 24 * 60 * 60;

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server.validate()?;
        self.provider.validate()?;
        self.storage.validate()?;
        self.uploads.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }

        if self.max_body_size > 1024 * 1024 * 100 {
            return Err("Max body size should not exceed 100MB".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("Provider timeout must be greater than 0".to_string());
        }

        if self.timeout > 300 {
            return Err("Provider timeout should not exceed 5 minutes".to_string());
        }

        validate_http_url(&self.api_base, "Provider API base")?;

        let defaults = &self.defaults;
        for (field, value) in [
            ("model", &defaults.model),
            ("size", &defaults.size),
            ("quality", &defaults.quality),
            ("style", &defaults.style),
        ] {
            if value.trim().is_empty() {
                return Err(format!("Default image {} cannot be empty", field));
            }
        }

        if self.api_key.as_deref().is_none_or(str::is_empty) {
            warn!("No provider API key configured; every generation request will fail");
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        let has_url = self.supabase_url.as_deref().is_some_and(|u| !u.is_empty());
        let has_key = self
            .service_role_key
            .as_deref()
            .is_some_and(|k| !k.is_empty());

        if has_url != has_key {
            warn!("Object storage needs both a URL and a service role key; mirroring is disabled");
        }

        if let Some(url) = self.supabase_url.as_deref().filter(|u| !u.is_empty()) {
            validate_http_url(url, "Storage URL")?;
        }

        if self.bucket.trim().is_empty() {
            return Err("Storage bucket cannot be empty".to_string());
        }

        if self.signed_url_ttl == 0 {
            return Err("Signed URL lifetime must be greater than 0".to_string());
        }

        if self.timeout == 0 {
            return Err("Storage timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for UploadsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.dir.trim().is_empty() {
            return Err("Uploads directory cannot be empty".to_string());
        }

        if !self.public_path.starts_with('/') {
            return Err(format!(
                "Uploads public path must start with '/': {}",
                self.public_path
            ));
        }

        Ok(())
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.is_empty() {
            return Err("JWT secret cannot be empty".to_string());
        }

        if self.jwt_secret.len() < 32 {
            warn!("JWT secret is shorter than 32 characters");
        }

        if self.jwt_expiration == 0 {
            return Err("JWT expiration must be greater than 0".to_string());
        }

        if self.jwt_expiration > MAX_JWT_EXPIRATION {
            return Err(format!(
                "JWT expiration must not exceed {} seconds",
                MAX_JWT_EXPIRATION
            ));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}

fn validate_http_url(value: &str, what: &str) -> Result<(), String> {
    let parsed = url::Url::parse(value).map_err(|e| format!("{} is not a valid URL: {}", what, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("{} must use http or https, got {}", what, other)),
    }
}
