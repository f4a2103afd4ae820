//! Error handling integration tests
//!
//! Tests for error type conversions and HTTP status mapping.

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpResponse, ResponseError, test as actix_test, web};
    use actix_web::body::MessageBody;
    use actix_web::http::StatusCode;
    use imagegen_gateway::{GatewayError, ProviderError};
    use serde_json::Value;

    // ==================== Status Mapping ====================

    #[test]
    fn test_provider_error_status_codes() {
        let cases = [
            (
                ProviderError::rate_limit("openai", "slow down"),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                ProviderError::invalid_request("openai", "bad size"),
                StatusCode::BAD_REQUEST,
            ),
            (
                ProviderError::authentication("openai", "bad key"),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ProviderError::network("openai", "connection reset"),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (provider_error, expected) in cases {
            let err = GatewayError::from(provider_error);
            assert_eq!(err.status_code(), expected, "{}", err);
        }
    }

    #[test]
    fn test_provider_timeout_converts_to_gateway_timeout() {
        let err = GatewayError::from(ProviderError::timeout("openai", "deadline elapsed"));
        assert!(matches!(err, GatewayError::Timeout(_)));
        assert_eq!(err.status_code(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_gateway_error_status_codes() {
        assert_eq!(
            GatewayError::config("missing").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::network("404 Not Found").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            GatewayError::storage("bucket gone").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            GatewayError::StorageDisabled.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    // ==================== Response Body ====================

    #[test]
    fn test_error_response_body_shape() {
        let response = GatewayError::StorageDisabled.error_response();
        let bytes = response.into_body().try_into_bytes().unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], "STORAGE_DISABLED");
        assert_eq!(body["error"]["message"], "Object storage is not configured");
        assert!(body["error"]["timestamp"].is_i64());
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let response = GatewayError::internal("stack trace with secrets").error_response();
        let bytes = response.into_body().try_into_bytes().unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "An internal error occurred");
    }

    // ==================== Handler Propagation ====================

    async fn failing_handler() -> actix_web::Result<HttpResponse> {
        Err(GatewayError::internal("Failed to generate token").into())
    }

    #[actix_web::test]
    async fn test_handler_error_renders_gateway_body() {
        let app =
            actix_test::init_service(App::new().route("/tokens", web::post().to(failing_handler))).await;

        let req = actix_test::TestRequest::post().uri("/tokens").to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "An internal error occurred");
    }
}
