//! Development user endpoint tests

#[cfg(test)]
mod tests {
    use crate::common::app::TEST_JWT_SECRET;
    use crate::common::fixtures::url_response;
    use crate::common::{FakeProvider, TestApp};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use imagegen_gateway::auth::JwtHandler;
    use imagegen_gateway::auth::jwt::types::TokenType;
    use imagegen_gateway::config::AuthConfig;
    use serde_json::{Value, json};

    fn harness() -> TestApp {
        TestApp::new(FakeProvider::ok(url_response("https://img.test/unused.png")))
    }

    fn verifier() -> JwtHandler {
        JwtHandler::new(&AuthConfig {
            jwt_secret: TEST_JWT_SECRET.to_string(),
            ..Default::default()
        })
    }

    #[actix_web::test]
    async fn test_register_issues_tokens() {
        let harness = harness();
        let app = crate::init_app!(harness);

        let req = test::TestRequest::post()
            .uri("/api/user/register")
            .set_json(json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "taxId": "12345678900",
                "email": "ada@example.com",
                "password": "hunter2"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User created successfully (test mode)");

        let claims = verifier()
            .verify_token(body["token"].as_str().unwrap())
            .await
            .unwrap();
        assert_eq!(claims.sub, "temp");
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.token_type, TokenType::Access);

        let refresh = verifier()
            .verify_token(body["refreshToken"].as_str().unwrap())
            .await
            .unwrap();
        assert_eq!(refresh.token_type, TokenType::Refresh);
    }

    #[actix_web::test]
    async fn test_register_rejects_missing_fields() {
        let harness = harness();
        let app = crate::init_app!(harness);

        let req = test::TestRequest::post()
            .uri("/api/user/register")
            .set_json(json!({"firstName": "Ada", "email": "ada@example.com", "password": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Required fields are missing"}));
    }

    #[actix_web::test]
    async fn test_login_derives_name_from_email() {
        let harness = harness();
        let app = crate::init_app!(harness);

        let req = test::TestRequest::post()
            .uri("/api/user/login")
            .set_json(json!({"email": "grace.hopper@example.com", "password": "anything"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["user"],
            json!({"id": "temp", "email": "grace.hopper@example.com", "name": "grace.hopper"})
        );
        assert!(body["token"].is_string());
        assert!(body["refreshToken"].is_string());
    }

    #[actix_web::test]
    async fn test_login_requires_password() {
        let harness = harness();
        let app = crate::init_app!(harness);

        let req = test::TestRequest::post()
            .uri("/api/user/login")
            .set_json(json!({"email": "a@b.c"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_refresh_returns_placeholder_tokens() {
        let harness = harness();
        let app = crate::init_app!(harness);

        let req = test::TestRequest::post().uri("/api/user/refresh").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let user = verifier()
            .verify_refresh_token(body["refreshToken"].as_str().unwrap())
            .await
            .unwrap();
        assert_eq!(user.id, "temp");
        assert_eq!(user.email, "temp@test.com");
        assert!(body["token"].is_string());
    }

    #[actix_web::test]
    async fn test_me_returns_placeholder_user() {
        let harness = harness();
        let app = crate::init_app!(harness);

        let req = test::TestRequest::get().uri("/api/user/me").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({"id": "temp", "email": "temp@test.com", "name": "Temp User"})
        );
    }
}
