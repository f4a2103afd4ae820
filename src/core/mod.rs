//! Core functionality for the gateway
//!
//! Data models and the image provider adapter.

pub mod models;
pub mod providers;
