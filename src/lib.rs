//! # imagegen-gateway
//!
//! An HTTP gateway in front of the OpenAI Images API.
//!
//! ## Features
//!
//! - **Image generation**: URL, base64 or file output, one endpoint each
//! - **Deadline fallback**: a provider slower than the configured timeout is
//!   answered with a placeholder image instead of an error
//! - **Object storage mirroring**: optional copy into Supabase Storage with a
//!   signed URL
//! - **Download proxy**: relays remote images to browser clients as attachments
//! - **Development tokens**: mock user endpoints that issue HS256 JWTs
//!
//! ## Running
//!
//! ```rust,no_run
//! use imagegen_gateway::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/gateway.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::models::{GeneratedImage, ImageEnvelope, OutputMode, StoredObject};
pub use core::providers::{ImageProvider, OpenAIImageClient, ProviderError};
pub use services::ImageService;
pub use storage::{ObjectStore, SupabaseStorage};
pub use utils::error::{GatewayError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
