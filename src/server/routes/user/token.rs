//! Token refresh endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};

use super::models::TokenResponse;
use super::{issue_tokens, placeholder_user};

/// Issue a fresh token pair for the placeholder user
pub async fn refresh_token(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let pair = issue_tokens(&state.jwt, &placeholder_user()).await?;

    Ok(HttpResponse::Ok().json(TokenResponse {
        token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}
