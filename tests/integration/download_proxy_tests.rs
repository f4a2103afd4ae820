//! Download proxy tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{PNG_BYTES, url_response};
    use crate::common::{FakeProvider, TestApp};
    use actix_web::http::StatusCode;
    use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
    use actix_web::test;
    use serde_json::{Value, json};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn harness() -> TestApp {
        TestApp::new(FakeProvider::ok(url_response("https://img.test/unused.png")))
    }

    #[actix_web::test]
    async fn test_proxy_relays_bytes_as_attachment() {
        let remote = MockServer::start().await;
        let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3, 4, 5];
        Mock::given(method("GET"))
            .and(path("/photo"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(jpeg.clone(), "image/jpeg"))
            .expect(1)
            .mount(&remote)
            .await;

        let harness = harness();
        let app = crate::init_app!(harness);
        let req = test::TestRequest::post()
            .uri("/api/image/download-proxy")
            .set_json(json!({"imageUrl": format!("{}/photo", remote.uri())}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "image/jpeg");
        assert_eq!(
            headers.get(CONTENT_LENGTH).unwrap().to_str().unwrap(),
            jpeg.len().to_string()
        );
        assert_eq!(
            headers.get(CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"image-download.jpg\""
        );

        let body = test::read_body(resp).await;
        assert_eq!(body.to_vec(), jpeg);
    }

    #[actix_web::test]
    async fn test_proxy_sniffs_unlabelled_png() {
        let remote = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_BYTES))
            .mount(&remote)
            .await;

        let harness = harness();
        let app = crate::init_app!(harness);
        let req = test::TestRequest::post()
            .uri("/api/image/download-proxy")
            .set_json(json!({"imageUrl": format!("{}/raw", remote.uri())}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "image/png");
        assert_eq!(
            resp.headers().get(CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"image-download.png\""
        );
    }

    #[actix_web::test]
    async fn test_proxy_requires_url() {
        let harness = harness();
        let app = crate::init_app!(harness);

        for body in [json!({}), json!({"imageUrl": ""})] {
            let req = test::TestRequest::post()
                .uri("/api/image/download-proxy")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({"error": "Image URL is required"}));
        }
    }

    #[actix_web::test]
    async fn test_proxy_reports_upstream_failure() {
        let remote = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&remote)
            .await;

        let harness = harness();
        let app = crate::init_app!(harness);
        let req = test::TestRequest::post()
            .uri("/api/image/download-proxy")
            .set_json(json!({"imageUrl": format!("{}/gone.png", remote.uri())}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Failed to download image: "));
        assert!(error.contains("404 Not Found"));
    }

    #[actix_web::test]
    async fn test_proxy_gives_up_on_stalled_remote() {
        let remote = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(PNG_BYTES.to_vec(), "image/png")
                    .set_delay(Duration::from_secs(8)),
            )
            .mount(&remote)
            .await;

        let harness = harness().with_download_timeout(Duration::from_millis(300));
        let app = crate::init_app!(harness);
        let req = test::TestRequest::post()
            .uri("/api/image/download-proxy")
            .set_json(json!({"imageUrl": format!("{}/slow.png", remote.uri())}))
            .to_request();
        let resp = tokio::time::timeout(Duration::from_secs(4), test::call_service(&app, req))
            .await
            .expect("proxy should answer before the remote does");

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Failed to download image: ")
        );
    }
}
