// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::application::usecases::summarize_document::SummarizeError;

/// 请求体无法按表单解析时的错误
///
/// 状态码沿用框架拒绝时给出的状态（例如 400 或 413）
#[derive(Error, Debug)]
#[error("{message}")]
pub struct MalformedRequest {
    pub status: StatusCode,
    pub message: String,
}

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 响应体为 `{"success": false, "detail": "..."}`。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<SummarizeError>() {
            return if err.is_validation_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
        }

        match self.0.downcast_ref::<MalformedRequest>() {
            Some(rejection) => rejection.status,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.0.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %detail, "Request failed");
        }

        let body = Json(json!({ "success": false, "detail": detail }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
