//! User registration endpoint

use crate::auth::UserIdentity;
use crate::server::routes::{ErrorBody, non_blank};
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::info;

use super::{PLACEHOLDER_USER_ID, issue_tokens};
use super::models::{RegisterRequest, RegisterResponse};

/// User registration endpoint
///
/// Validates that the required fields are present and issues tokens; nothing is persisted.
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> ActixResult<HttpResponse> {
    let required = (
        non_blank(request.first_name.as_deref()),
        non_blank(request.last_name.as_deref()),
        non_blank(request.tax_id.as_deref()),
        non_blank(request.email.as_deref()),
        non_blank(request.password.as_deref()),
    );
    let (Some(first_name), Some(_), Some(_), Some(email), Some(_)) = required else {
        return Ok(ErrorBody::bad_request("Required fields are missing"));
    };

    info!("Registration for: {}", email);

    let user = UserIdentity::new(PLACEHOLDER_USER_ID, email, first_name);
    let pair = issue_tokens(&state.jwt, &user).await?;

    Ok(HttpResponse::Ok().json(RegisterResponse {
        message: "User created successfully (test mode)".to_string(),
        token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}
