//! Main gateway configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Image provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Object storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Local upload directory configuration
    #[serde(default)]
    pub uploads: UploadsConfig,
    /// Mock authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
