//! User login endpoint

use crate::auth::UserIdentity;
use crate::server::routes::{ErrorBody, non_blank};
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::info;

use super::{PLACEHOLDER_USER_ID, issue_tokens};
use super::models::{LoginRequest, LoginResponse};

/// User login endpoint
///
/// Accepts any email and password pair; the display name is the email's local part.
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    let (Some(email), Some(_)) = (
        non_blank(request.email.as_deref()),
        non_blank(request.password.as_deref()),
    ) else {
        return Ok(ErrorBody::bad_request("Required fields are missing"));
    };

    info!("User login: {}", email);

    let name = email.split('@').next().unwrap_or(email);
    let user = UserIdentity::new(PLACEHOLDER_USER_ID, email, name);

    let pair = issue_tokens(&state.jwt, &user).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token: pair.access_token,
        refresh_token: pair.refresh_token,
        user,
    }))
}
