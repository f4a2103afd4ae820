//! imagegen-gateway - HTTP gateway for image generation

#![allow(missing_docs)]

use clap::Parser;
use imagegen_gateway::{Config, server, utils};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "HTTP gateway for image generation")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(
        short,
        long,
        env = "GATEWAY_CONFIG",
        default_value = "config/gateway.yaml"
    )]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();

    let config = match Config::load(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = utils::init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Ok(path) = dotenv {
        info!("Loaded environment from {:?}", path);
    }
    info!("Using configuration: {:?}", args.config);

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
