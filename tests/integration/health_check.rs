// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use docsumm::application::usecases::summarize_document::SummarizeDocumentUseCase;
use docsumm::config::settings::UploadSettings;
use docsumm::domain::services::text_extractor::PdfTextExtractor;
use docsumm::presentation::routes;
use serde_json::Value;
use tower::util::ServiceExt;

use super::helpers::{create_test_server, test_cors, MockSummarizer};

/// 健康检查测试
///
/// 验证健康检查端点是否正常工作
#[tokio::test]
async fn health_check_works() {
    let server = create_test_server(MockSummarizer::succeeding());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["api_configured"], true);
}

#[tokio::test]
async fn health_check_reports_missing_api_key() {
    let server = create_test_server(MockSummarizer::unconfigured());

    let body: Value = server.get("/health").await.json();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["api_configured"], false);
}

/// HEAD 请求同样应返回 200
#[tokio::test]
async fn health_check_answers_head() {
    let use_case = Arc::new(SummarizeDocumentUseCase::new(
        Arc::new(PdfTextExtractor::new()),
        MockSummarizer::succeeding(),
        UploadSettings::default(),
    ));
    let app = routes::app(use_case, &test_cors());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::HEAD)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn root_describes_api() {
    let server = create_test_server(MockSummarizer::succeeding());

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Document Summarization AI API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["endpoints"]["POST /summarize"].is_string());
}

#[tokio::test]
async fn styles_lists_all_choices_in_order() {
    let server = create_test_server(MockSummarizer::succeeding());

    let body: Value = server.get("/styles").await.json();

    let names: Vec<&str> = body["styles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|style| style["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["brief", "detailed", "bullet_points"]);
    assert_eq!(
        body["styles"][0]["description"],
        "Concise 3-4 sentence summary of main points"
    );
}

#[tokio::test]
async fn cors_allows_configured_frontend() {
    let use_case = Arc::new(SummarizeDocumentUseCase::new(
        Arc::new(PdfTextExtractor::new()),
        MockSummarizer::succeeding(),
        UploadSettings::default(),
    ));
    let app = routes::app(use_case, &test_cors());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
