// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::dto::summarize_response::SummaryResponseDto;
use crate::application::usecases::summarize_document::SummarizeDocumentUseCase;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::summarize_form::SummarizeForm;

/// 摘要端点
///
/// 接收 multipart 表单（`style`、`file` 或 `text`），成功返回 200 和摘要，
/// 校验错误返回 400，服务端错误返回 500。
pub async fn summarize(
    Extension(use_case): Extension<Arc<SummarizeDocumentUseCase>>,
    SummarizeForm(request): SummarizeForm,
) -> Result<Json<SummaryResponseDto>, AppError> {
    let response = use_case.execute(request).await?;
    Ok(Json(response))
}
