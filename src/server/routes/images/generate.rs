//! Image generation endpoints

use crate::core::models::{GeneratedImage, OutputMode};
use crate::server::routes::ErrorBody;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::{info, warn};

use super::models::ImageRequest;

const PROMPT_REQUIRED: &str = "Prompt is required";

/// Generate an image as a URL, or as a saved file when `saveToFile` is set
pub async fn generate(
    state: web::Data<AppState>,
    request: web::Json<ImageRequest>,
) -> ActixResult<HttpResponse> {
    let mode = if request.save_to_file.unwrap_or(false) {
        OutputMode::File
    } else {
        OutputMode::Url
    };
    Ok(run(&state, &request, mode).await)
}

/// Generate an image and save it under the uploads directory
pub async fn generate_file(
    state: web::Data<AppState>,
    request: web::Json<ImageRequest>,
) -> ActixResult<HttpResponse> {
    Ok(run(&state, &request, OutputMode::File).await)
}

/// Generate an image returned inline as base64
pub async fn generate_base64(
    state: web::Data<AppState>,
    request: web::Json<ImageRequest>,
) -> ActixResult<HttpResponse> {
    Ok(run(&state, &request, OutputMode::Base64).await)
}

/// Generate an image URL, optionally mirrored into object storage
pub async fn generate_url(
    state: web::Data<AppState>,
    request: web::Json<ImageRequest>,
) -> ActixResult<HttpResponse> {
    let Some(prompt) = request.prompt() else {
        return Ok(ErrorBody::bad_request(PROMPT_REQUIRED));
    };

    info!("Generating image URL for prompt: {}", prompt);
    let image = state
        .images
        .generate(prompt, &request.options, OutputMode::Url)
        .await;

    if !image.is_success() {
        return Ok(respond(&image));
    }

    let mut envelope = image.to_api_response();
    if request.store.unwrap_or(false) {
        match image.remote_url() {
            Some(url) => match state.images.mirror_to_storage(url, prompt).await {
                Ok(stored) => envelope = envelope.with_stored(stored),
                Err(e) if e.is_storage_disabled() => {
                    warn!("Storage requested but object storage is not configured");
                }
                Err(e) => warn!("Failed to mirror image to storage: {}", e),
            },
            None => warn!("Storage requested but the image has no URL"),
        }
    }

    Ok(HttpResponse::Ok().json(envelope))
}

async fn run(state: &AppState, request: &ImageRequest, mode: OutputMode) -> HttpResponse {
    let Some(prompt) = request.prompt() else {
        return ErrorBody::bad_request(PROMPT_REQUIRED);
    };

    info!("Generating image ({:?}) for prompt: {}", mode, prompt);
    let image = state.images.generate(prompt, &request.options, mode).await;
    respond(&image)
}

/// 200 with the envelope on success, 500 otherwise
fn respond(image: &GeneratedImage) -> HttpResponse {
    let envelope = image.to_api_response();
    if image.is_success() {
        HttpResponse::Ok().json(envelope)
    } else {
        HttpResponse::InternalServerError().json(envelope)
    }
}
