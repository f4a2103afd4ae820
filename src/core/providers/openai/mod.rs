//! OpenAI Provider
//!
//! Image generation against the OpenAI Images API.

pub mod client;

pub use client::OpenAIImageClient;
