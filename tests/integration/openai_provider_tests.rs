//! End-to-end tests through the real OpenAI client against a mock API

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use imagegen_gateway::Config;
    use imagegen_gateway::server::{AppState, create_app};
    use serde_json::{Value, json};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(api_base: &str, api_key: Option<&str>, uploads: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.gateway.provider.api_base = api_base.to_string();
        config.gateway.provider.api_key = api_key.map(str::to_string);
        config.gateway.uploads.dir = uploads.to_string_lossy().into_owned();
        config
    }

    #[actix_web::test]
    async fn test_generate_url_through_openai_client() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "prompt": "a paper boat",
                "model": "dall-e-3",
                "n": 1,
                "quality": "hd",
                "response_format": "url"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "created": 1700000000,
                "data": [{"url": "https://img.example/boat.png"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uploads = tempfile::tempdir().unwrap();
        let state = AppState::from_config(config(
            &format!("{}/v1", server.uri()),
            Some("sk-test"),
            uploads.path(),
        ))
        .unwrap();
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/api/image/generate-url")
            .set_json(json!({"prompt": "a paper boat", "quality": "hd"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["url"], "https://img.example/boat.png");
        assert_eq!(body["data"]["created"], 1_700_000_000);
        assert!(body["data"]["usage"].is_null());
    }

    #[actix_web::test]
    async fn test_provider_rejection_surfaces_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"message": "Invalid size", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let uploads = tempfile::tempdir().unwrap();
        let state = AppState::from_config(config(
            &format!("{}/v1", server.uri()),
            Some("sk-test"),
            uploads.path(),
        ))
        .unwrap();
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/api/image/generate")
            .set_json(json!({"prompt": "a paper boat", "size": "1x1"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Image generation failed: Invalid size");
    }

    #[actix_web::test]
    async fn test_missing_api_key_fails_per_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let uploads = tempfile::tempdir().unwrap();
        let state = AppState::from_config(config(&server.uri(), None, uploads.path())).unwrap();
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/api/image/generate-base64")
            .set_json(json!({"prompt": "a paper boat"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("API key is not configured"));
    }
}
