//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::ProviderError;

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Timeout { message, .. } => GatewayError::Timeout(message),
            ProviderError::Configuration { message, .. } => GatewayError::Config(message),
            other => GatewayError::Provider(other),
        }
    }
}
