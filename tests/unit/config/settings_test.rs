// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 测试默认值加载和跨域来源的合并规则

#[cfg(test)]
mod tests {
    use docsumm::config::settings::{
        CorsSettings, Settings, UploadSettings, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_REQUEST_SIZE,
    };

    #[test]
    fn test_config_loading_defaults() {
        let settings = Settings::new().expect("default configuration should load");

        assert_eq!(settings.upload.max_file_size, 5 * 1024 * 1024);
        assert_eq!(settings.upload.min_text_length, 50);
        assert_eq!(settings.upload.max_text_length, 50_000);
        assert_eq!(settings.llm.timeout_secs, 60);
        assert!(!settings.llm.model.is_empty());
        assert_eq!(settings.upload.max_request_size, 64 * 1024 * 1024);
        assert!(!settings.cors.allowed_origins().is_empty());
    }

    #[test]
    fn test_default_origins_include_deployed_frontend() {
        let settings = Settings::new().expect("default configuration should load");
        let origins = settings.cors.allowed_origins();

        for expected in [
            "http://localhost:5173",
            "http://localhost:3000",
            "https://worko-ai-assignment-ten.vercel.app",
        ] {
            assert!(origins.contains(&expected.to_string()), "{}", expected);
        }
    }

    #[test]
    fn test_upload_defaults() {
        let upload = UploadSettings::default();
        assert_eq!(upload.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert_eq!(upload.min_text_length, 50);
        assert_eq!(upload.max_text_length, 50_000);
        assert_eq!(upload.max_request_size, DEFAULT_MAX_REQUEST_SIZE);
        assert!(upload.max_request_size > upload.max_file_size);
    }

    #[test]
    fn test_allowed_origins_deduplicates_and_keeps_frontend_first() {
        let cors = CorsSettings {
            frontend_url: "https://app.example.com".to_string(),
            extra_origins: vec![
                "http://localhost:5173".to_string(),
                "https://app.example.com".to_string(),
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
            ],
        };

        assert_eq!(
            cors.allowed_origins(),
            vec![
                "https://app.example.com".to_string(),
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ]
        );
    }
}
