//! Image endpoints
//!
//! All routes live under `/api/image` and answer with the image envelope,
//! except the download proxy which relays raw bytes.

mod generate;
mod models;
mod proxy;

pub use generate::{generate, generate_base64, generate_file, generate_url};
pub use models::{DownloadProxyRequest, ImageRequest};
pub use proxy::download_proxy;

use actix_web::web;

/// Configure image routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/image")
            .route("/generate", web::post().to(generate))
            .route("/generate-file", web::post().to(generate_file))
            .route("/generate-base64", web::post().to(generate_base64))
            .route("/generate-url", web::post().to(generate_url))
            .route("/download-proxy", web::post().to(download_proxy)),
    );
}
