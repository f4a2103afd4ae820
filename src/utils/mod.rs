//! Utility modules for the gateway
//!
//! - **error**: Error types and their HTTP mapping
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use logging::init_logging;
