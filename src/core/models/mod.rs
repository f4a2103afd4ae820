//! Core data models for the gateway
//!
//! - `openai` - wire types of the provider's image API
//! - `image` - generation results and the envelope returned to clients

pub mod image;
pub mod openai;

pub use image::*;
