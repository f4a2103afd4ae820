//! Error handling utilities
//!
//! This module provides the gateway error type and its HTTP representation.

pub mod error;

// Re-export commonly used types
pub use error::*;
