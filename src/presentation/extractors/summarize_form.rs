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

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::StatusCode;
use bytes::BytesMut;
use tracing::debug;

use crate::application::dto::summarize_request::{SummarizeRequestDto, UploadedFile};
use crate::application::usecases::summarize_document::SummarizeDocumentUseCase;
use crate::config::settings::DEFAULT_MAX_FILE_SIZE;
use crate::presentation::errors::{AppError, MalformedRequest};

/// 摘要表单提取器
///
/// 读取 `style`、`file`、`text` 三个字段，未知字段会被读取并丢弃。
/// 文件内容读取失败或超过大小上限时不会立即返回错误，而是记录在 [`UploadedFile`] 中，
/// 这样风格和输入互斥的校验仍然先于这些错误被报告。
pub struct SummarizeForm(pub SummarizeRequestDto);

impl<S> FromRequest<S> for SummarizeForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let max_file_size = req
            .extensions()
            .get::<Arc<SummarizeDocumentUseCase>>()
            .map_or(DEFAULT_MAX_FILE_SIZE, |use_case| use_case.limits().max_file_size);

        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| MalformedRequest {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        parse_summarize_form(multipart, max_file_size)
            .await
            .map(SummarizeForm)
    }
}

/// 解析 multipart 表单为摘要请求
///
/// 文件最多缓存 `max_file_size` 字节，超出部分被读取并丢弃，后续字段照常解析。
/// 请求体上限在文件之中或之后触发时，文件被标记为超限。
pub async fn parse_summarize_form(
    mut multipart: Multipart,
    max_file_size: usize,
) -> Result<SummarizeRequestDto, AppError> {
    let mut request = SummarizeRequestDto::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) if is_body_limit(&e) && request.file.is_some() => {
                if let Some(file) = request.file.take() {
                    request.file = Some(UploadedFile::too_large(file.filename));
                }
                break;
            }
            Err(e) => return Err(malformed(e)),
        };
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "style" => {
                request.style = field.text().await.map_err(malformed)?;
            }
            "text" => {
                request.text = Some(field.text().await.map_err(malformed)?);
            }
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let (file, stream_usable) = read_file(field, filename, max_file_size).await;
                request.file = Some(file);
                if !stream_usable {
                    break;
                }
            }
            other => {
                debug!(field = other, "Ignoring unknown form field");
                drain(field).await?;
            }
        }
    }

    Ok(request)
}

/// 分块读取文件字段
///
/// 返回读取结果，以及请求体是否还能继续解析
async fn read_file(
    mut field: Field<'_>,
    filename: String,
    max_file_size: usize,
) -> (UploadedFile, bool) {
    let mut buffer = BytesMut::new();
    let mut received = 0usize;

    loop {
        match field.chunk().await {
            Ok(Some(chunk)) => {
                received += chunk.len();
                if received <= max_file_size {
                    buffer.extend_from_slice(&chunk);
                } else if !buffer.is_empty() {
                    buffer = BytesMut::new();
                }
            }
            Ok(None) => break,
            Err(e) if is_body_limit(&e) => {
                debug!(filename = %filename, received, "Upload exceeded request body limit");
                return (UploadedFile::too_large(filename), false);
            }
            Err(e) => return (UploadedFile::unreadable(filename, e.body_text()), false),
        }
    }

    debug!(filename = %filename, bytes = received, "Received upload");
    if received > max_file_size {
        (UploadedFile::too_large(filename), true)
    } else {
        (UploadedFile::new(filename, buffer.freeze()), true)
    }
}

async fn drain(mut field: Field<'_>) -> Result<(), AppError> {
    while field.chunk().await.map_err(malformed)?.is_some() {}
    Ok(())
}

fn is_body_limit(err: &MultipartError) -> bool {
    err.status() == StatusCode::PAYLOAD_TOO_LARGE
}

fn malformed(err: MultipartError) -> AppError {
    MalformedRequest {
        status: err.status(),
        message: format!("Failed to read form field: {}", err.body_text()),
    }
    .into()
}
