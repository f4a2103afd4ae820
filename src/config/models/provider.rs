//! Image provider configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Image provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider API key (`OPENAI_API_KEY`)
    #[serde(default)]
    pub api_key: Option<String>,
    /// API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Seconds to wait for the provider before answering with the fallback image
    #[serde(default = "default_provider_timeout")]
    pub timeout: u64,
    /// Options used when a request leaves them out
    #[serde(default)]
    pub defaults: ImageDefaults,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            timeout: default_provider_timeout(),
            defaults: ImageDefaults::default(),
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .field("defaults", &self.defaults)
            .finish()
    }
}

/// Default generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDefaults {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_size")]
    pub size: String,
    #[serde(default = "default_quality")]
    pub quality: String,
    #[serde(default = "default_style")]
    pub style: String,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self {
            model: default_model(),
            size: default_size(),
            quality: default_quality(),
            style: default_style(),
        }
    }
}
