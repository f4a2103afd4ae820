//! Helper functions for creating specific error types

use super::types::GatewayError;

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    /// Whether the error reports a missing storage configuration rather than a failure
    pub fn is_storage_disabled(&self) -> bool {
        matches!(self, Self::StorageDisabled)
    }
}
