// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::application::usecases::summarize_document::SummarizeDocumentUseCase;
use crate::config::settings::CorsSettings;
use crate::presentation::handlers::{info_handler, summarize_handler};

/// 创建应用路由
///
/// # 返回值
///
/// 返回未挂载任何状态和中间件的路由
pub fn routes() -> Router {
    Router::new()
        .route("/", get(info_handler::root))
        // GET routes also answer HEAD
        .route("/health", get(info_handler::health_check))
        .route("/styles", get(info_handler::styles))
        .route("/summarize", post(summarize_handler::summarize))
}

/// 组装完整应用
///
/// 挂载摘要用例、请求体上限、跨域和请求追踪中间件。
/// 请求体上限远高于文件上限，超过文件上限的上传由表单解析丢弃并得到 400。
pub fn app(use_case: Arc<SummarizeDocumentUseCase>, cors: &CorsSettings) -> Router {
    let body_limit = use_case.limits().max_request_size;

    routes()
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(Extension(use_case))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// 根据配置构造跨域中间件
///
/// 允许携带凭据，因此方法和请求头采用镜像而非通配
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
