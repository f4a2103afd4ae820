//! Mock authentication configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Configuration for the development token issuer
///
/// The user endpoints sign tokens for a placeholder account; nothing in the gateway checks them.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret (`JWT_SECRET`)
    #[serde(default = "generate_jwt_secret")]
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration", &self.jwt_expiration)
            .finish()
    }
}

/// Random per-process secret used when none is configured
fn generate_jwt_secret() -> String {
    format!(
        "{}{}",
        uuid::Uuid::new_v4().simple(),
        uuid::Uuid::new_v4().simple()
    )
}
