//! Health endpoint and middleware tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::url_response;
    use crate::common::{FakeProvider, MemoryStore, TestApp};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_health_reports_storage_state() {
        let harness = TestApp::new(FakeProvider::ok(url_response("https://img.test/a.png")));
        let app = crate::init_app!(harness);

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("server").unwrap(), "imagegen-gateway");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["version"], imagegen_gateway::VERSION);
        assert_eq!(body["data"]["storageEnabled"], false);

        let harness = TestApp::new(FakeProvider::ok(url_response("https://img.test/a.png")))
            .with_store(Arc::new(MemoryStore::default()));
        let app = crate::init_app!(harness);
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["storageEnabled"], true);
    }

    #[actix_web::test]
    async fn test_request_id_is_echoed_or_generated() {
        let harness = TestApp::new(FakeProvider::ok(url_response("https://img.test/a.png")));
        let app = crate::init_app!(harness);

        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header(("x-request-id", "trace-123"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-123");

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        let generated = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(generated).is_ok());
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let harness = TestApp::new(FakeProvider::ok(url_response("https://img.test/a.png")));
        let app = crate::init_app!(harness);

        let req = test::TestRequest::get().uri("/api/image/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
