//! Development user endpoints
//!
//! Every handler signs tokens for a fixed placeholder account. Nothing is
//! stored, no password is checked, and no route in the gateway requires the
//! tokens.

mod login;
mod models;
mod register;
mod token;
mod user;

pub use login::login;
pub use models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, TokenResponse};
pub use register::register;
pub use token::refresh_token;
pub use user::get_current_user;

use crate::auth::jwt::TokenPair;
use crate::auth::{JwtHandler, UserIdentity};
use crate::utils::error::{GatewayError, Result};
use actix_web::web;
use tracing::error;

/// Id carried by every issued token
pub const PLACEHOLDER_USER_ID: &str = "temp";

/// Identity returned by `/me` and used by `/refresh`
pub fn placeholder_user() -> UserIdentity {
    UserIdentity::new(PLACEHOLDER_USER_ID, "temp@test.com", "Temp User")
}

/// Sign a token pair for `user`
///
/// Signing failures surface as an internal error; handlers propagate them with `?`.
pub(crate) async fn issue_tokens(jwt: &JwtHandler, user: &UserIdentity) -> Result<TokenPair> {
    jwt.create_token_pair(user).await.map_err(|e| {
        error!("Failed to issue tokens for {}: {}", user.id, e);
        GatewayError::internal("Failed to generate token")
    })
}

/// Configure user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/user")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/refresh", web::post().to(refresh_token))
            .route("/me", web::get().to(get_current_user)),
    );
}
