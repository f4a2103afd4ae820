//! Download proxy endpoint

use crate::server::routes::{ErrorBody, non_blank};
use crate::server::state::AppState;
use crate::storage::object::extension_for;
use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::{error, info};

use super::models::DownloadProxyRequest;

/// Fetch a remote image and hand it back as an attachment
///
/// Lets browser clients save provider-hosted images that would otherwise be
/// blocked by CORS.
pub async fn download_proxy(
    state: web::Data<AppState>,
    request: web::Json<DownloadProxyRequest>,
) -> ActixResult<HttpResponse> {
    let Some(image_url) = non_blank(request.image_url.as_deref()) else {
        return Ok(ErrorBody::bad_request("Image URL is required"));
    };

    info!("Proxying image download: {}", image_url);

    match state.images.download(image_url).await {
        Ok(image) => {
            info!("Relaying {} bytes", image.size());
            let disposition = format!(
                "attachment; filename=\"image-download.{}\"",
                extension_for(&image.content_type)
            );
            Ok(HttpResponse::Ok()
                .insert_header((CONTENT_TYPE, image.content_type.as_str()))
                .insert_header((CONTENT_LENGTH, image.size()))
                .insert_header((CONTENT_DISPOSITION, disposition))
                .body(image.bytes))
        }
        Err(e) => {
            error!("Image proxy failed: {}", e);
            Ok(ErrorBody::internal(format!("Failed to download image: {}", e)))
        }
    }
}
