//! Services module
//!
//! Business logic sitting between the HTTP routes and the provider and storage adapters

pub mod image;

pub use image::{DownloadedImage, ImageService, ImageServiceSettings};
