//! The `Validate` trait shared by every configuration section

/// A configuration section that can check its own values
///
/// Errors are human-readable messages; `Config::validate` wraps them in
/// `GatewayError::Config`.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
