//! Application state shared across HTTP handlers

use crate::auth::JwtHandler;
use crate::config::Config;
use crate::services::ImageService;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Built once at startup; every field is behind an `Arc` so the state is
/// cheap to clone into each worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Image generation service
    pub images: Arc<ImageService>,
    /// Token issuer for the user endpoints
    pub jwt: Arc<JwtHandler>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, images: ImageService, jwt: JwtHandler) -> Self {
        Self {
            config: Arc::new(config),
            images: Arc::new(images),
            jwt: Arc::new(jwt),
        }
    }

    /// Build every service from configuration
    pub fn from_config(config: Config) -> Result<Self> {
        let images = ImageService::from_config(&config.gateway)?;
        let jwt = JwtHandler::new(config.auth());
        Ok(Self::new(config, images, jwt))
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
