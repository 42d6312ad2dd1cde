// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::usecases::summarize_document::SummarizeDocumentUseCase;
use crate::domain::models::summary::SummaryStyle;

/// 服务说明端点
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Document Summarization AI API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /summarize": "Summarize a document (PDF file or text input)",
            "GET /health": "Health check endpoint",
            "GET /styles": "Get available summarization styles"
        }
    }))
}

/// 健康检查端点
///
/// `api_configured` 表示 LLM API 密钥是否可用
pub async fn health_check(
    Extension(use_case): Extension<Arc<SummarizeDocumentUseCase>>,
) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "api_configured": use_case.is_service_configured()
    }))
}

/// 可用摘要风格列表
pub async fn styles() -> Json<Value> {
    let styles: Vec<Value> = SummaryStyle::ALL
        .iter()
        .map(|style| {
            json!({
                "name": style.as_str(),
                "description": style.description()
            })
        })
        .collect();

    Json(json!({ "styles": styles }))
}
