//! Server startup entry point

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Build and run the server until it shuts down
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting imagegen gateway");

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}",
        config.server().address()
    );
    info!(
        "Object storage: {}",
        if server.state().images.storage_enabled() {
            "enabled"
        } else {
            "disabled"
        }
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/image/generate - Generate an image (URL or file)");
    info!("   POST /api/image/generate-file - Generate and save to the uploads directory");
    info!("   POST /api/image/generate-base64 - Generate as base64");
    info!("   POST /api/image/generate-url - Generate as URL, optionally mirrored");
    info!("   POST /api/image/download-proxy - Relay a remote image");
    info!("   POST /api/user/{{register,login,refresh}}, GET /api/user/me - Development tokens");

    server.start().await
}
