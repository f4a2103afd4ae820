//! Configuration loading tests

#[cfg(test)]
mod tests {
    use imagegen_gateway::Config;
    use imagegen_gateway::services::ImageService;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_CONFIG: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  cors:
    allowed_origins: ["https://app.example.com"]
provider:
  api_key: "sk-from-file"
  timeout: 45
  defaults:
    model: "dall-e-2"
    size: "512x512"
storage:
  supabase_url: "https://project.supabase.co"
  service_role_key: "service-key"
  bucket: "renders"
uploads:
  dir: "var/uploads"
auth:
  jwt_secret: "a-secret-that-is-long-enough-for-hs256"
logging:
  level: "debug"
  json: true
"#;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_full_config_file() {
        let file = write_config(FULL_CONFIG);
        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.server().address(), "127.0.0.1:9090");
        assert_eq!(config.provider().timeout, 45);
        assert_eq!(config.provider().defaults.model, "dall-e-2");
        assert_eq!(config.provider().defaults.quality, "standard");
        assert_eq!(config.storage().bucket, "renders");
        assert!(config.storage().is_enabled());
        assert_eq!(config.uploads().public_path, "/uploads");
        assert!(config.logging().json);
    }

    #[tokio::test]
    async fn test_service_from_config_enables_storage() {
        let file = write_config(FULL_CONFIG);
        let config = Config::from_file(file.path()).await.unwrap();

        let service = ImageService::from_config(&config.gateway).unwrap();
        assert!(service.storage_enabled());
        assert_eq!(service.settings().timeout.as_secs(), 45);
        assert_eq!(service.settings().defaults.size, "512x512");

        let service = ImageService::from_config(&Config::default().gateway).unwrap();
        assert!(!service.storage_enabled());
    }

    #[tokio::test]
    async fn test_invalid_config_file_is_rejected() {
        let file = write_config("provider:\n  timeout: 0\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("timeout"));

        let file = write_config("server: [not, a, mapping]\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[test]
    fn test_env_overrides_take_precedence() {
        let mut config = Config::from_yaml(FULL_CONFIG).unwrap();
        config
            .gateway
            .apply_overrides(|key| match key {
                "GATEWAY_PORT" => Some("7000".to_string()),
                "OPENAI_API_KEY" => Some("sk-from-env".to_string()),
                "IMAGE_TIMEOUT_SECS" => Some("5".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.server().port, 7000);
        assert_eq!(config.provider().api_key.as_deref(), Some("sk-from-env"));
        assert_eq!(config.provider().timeout, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip_keeps_storage_settings() {
        let config = Config::from_yaml(FULL_CONFIG).unwrap();
        let yaml = config.to_yaml().unwrap();
        let reparsed = Config::from_yaml(&yaml).unwrap();

        assert_eq!(reparsed.storage().bucket, "renders");
        assert_eq!(reparsed.storage().signed_url_ttl, 3600);
    }
}
