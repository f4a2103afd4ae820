//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::{info, warn};

/// Access log line; includes the request id set by `RequestIdMiddleware`
const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %{x-request-id}o %Dms"#;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let uploads_dir = &config.uploads().dir;
        tokio::fs::create_dir_all(uploads_dir).await.map_err(|e| {
            GatewayError::Config(format!(
                "Failed to create uploads directory {}: {}",
                uploads_dir, e
            ))
        })?;

        let state = AppState::from_config(config.clone())?;

        Ok(Self::with_state(config.gateway.server.clone(), state))
    }

    /// Create a server around a prepared state
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| GatewayError::internal(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let server_config = &state.config.gateway.server;
    let uploads = state.config.uploads().clone();
    let cors = build_cors(&server_config.cors);
    let json_config = routes::json_config(server_config.max_body_size);

    App::new()
        .app_data(state)
        .app_data(json_config)
        .wrap(cors)
        .wrap(Logger::new(ACCESS_LOG_FORMAT))
        .wrap(RequestIdMiddleware)
        .wrap(DefaultHeaders::new().add(("Server", "imagegen-gateway")))
        .configure(routes::configure_routes)
        .service(actix_files::Files::new(&uploads.public_path, &uploads.dir))
}

fn build_cors(cors_config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();

    if !cors_config.enabled {
        return cors;
    }

    if cors_config.allows_all_origins() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors = cors
        .expose_headers(["x-request-id", "content-disposition"])
        .max_age(cors_config.max_age as usize);

    if cors_config.allow_credentials {
        if cors_config.allows_all_origins() {
            warn!("Ignoring allow_credentials with a wildcard origin");
        } else {
            cors = cors.supports_credentials();
        }
    }

    cors
}
