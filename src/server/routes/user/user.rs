//! Current user endpoint

use actix_web::{HttpResponse, Result as ActixResult};

use super::placeholder_user;

/// Return the placeholder user
pub async fn get_current_user() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(placeholder_user()))
}
