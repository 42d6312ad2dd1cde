// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::application::dto::summarize_request::{FileContent, SummarizeRequestDto, UploadedFile};
use crate::application::dto::summarize_response::SummaryResponseDto;
use crate::config::settings::UploadSettings;
use crate::domain::models::summary::{InputType, SummaryResult, SummaryStyle};
use crate::domain::services::llm_service::LLMServiceTrait;
use crate::domain::services::text_extractor::{ExtractionError, TextExtractor};

const BYTES_PER_MB: usize = 1024 * 1024;

/// 摘要用例错误类型
///
/// 分为客户端可修正的校验错误和服务端的运行错误两类，见 [`SummarizeError::is_validation_error`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("Invalid style. Choose from: {}", SummaryStyle::choices())]
    InvalidStyle(String),

    #[error("Please provide either a PDF file or text input")]
    MissingInput,

    #[error("Please provide only one input method (file OR text, not both)")]
    AmbiguousInput,

    #[error("Only PDF files are supported")]
    UnsupportedFileType,

    #[error("File too large. Maximum size: {}MB", .max_bytes / BYTES_PER_MB)]
    FileTooLarge { max_bytes: usize },

    #[error("Failed to read file: {0}")]
    IoFailure(String),

    #[error("Could not extract text from PDF. Please ensure the PDF contains selectable text.")]
    NoTextExtracted,

    #[error("PDF processing failed: {0}")]
    PdfProcessingFailed(String),

    #[error("Text input cannot be empty")]
    EmptyInput,

    #[error("Text is too short to summarize (minimum {min} characters)")]
    TextTooShort { min: usize },

    #[error("Text is too long. Maximum length: {max} characters")]
    TextTooLong { max: usize },

    #[error("AI service not configured. Please set GROQ_API_KEY.")]
    ServiceUnconfigured,

    #[error("{0}")]
    SummarizationFailed(String),
}

impl SummarizeError {
    /// 是否为客户端引起的校验错误
    pub fn is_validation_error(&self) -> bool {
        match self {
            SummarizeError::InvalidStyle(_)
            | SummarizeError::MissingInput
            | SummarizeError::AmbiguousInput
            | SummarizeError::UnsupportedFileType
            | SummarizeError::FileTooLarge { .. }
            | SummarizeError::NoTextExtracted
            | SummarizeError::EmptyInput
            | SummarizeError::TextTooShort { .. }
            | SummarizeError::TextTooLong { .. } => true,
            SummarizeError::IoFailure(_)
            | SummarizeError::PdfProcessingFailed(_)
            | SummarizeError::ServiceUnconfigured
            | SummarizeError::SummarizationFailed(_) => false,
        }
    }
}

impl From<ExtractionError> for SummarizeError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::NoTextExtracted => SummarizeError::NoTextExtracted,
            other @ ExtractionError::MalformedDocument(_) => {
                SummarizeError::PdfProcessingFailed(other.to_string())
            }
        }
    }
}

/// 校验通过、准备送去摘要的文档
struct PreparedDocument {
    input_type: InputType,
    filename: Option<String>,
    text: String,
}

/// 文档摘要用例
///
/// 按固定顺序校验请求，遇到第一个失败立即返回：
/// 1. 风格
/// 2. 文件与文本二选一
/// 3. 文件名、读取结果和大小
/// 4. PDF 文本提取
/// 5. 文本长度
/// 6. API 密钥
/// 7. 调用摘要客户端
pub struct SummarizeDocumentUseCase {
    extractor: Arc<dyn TextExtractor>,
    summarizer: Arc<dyn LLMServiceTrait>,
    limits: UploadSettings,
}

impl SummarizeDocumentUseCase {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        summarizer: Arc<dyn LLMServiceTrait>,
        limits: UploadSettings,
    ) -> Self {
        Self {
            extractor,
            summarizer,
            limits,
        }
    }

    /// 摘要服务是否已配置 API 密钥
    pub fn is_service_configured(&self) -> bool {
        self.summarizer.is_configured()
    }

    pub fn limits(&self) -> &UploadSettings {
        &self.limits
    }

    pub async fn execute(
        &self,
        request: SummarizeRequestDto,
    ) -> Result<SummaryResponseDto, SummarizeError> {
        let result = self.run(request).await;
        if let Err(e) = &result {
            if e.is_validation_error() {
                warn!(error = %e, "Summarize request rejected");
            } else {
                error!(error = %e, "Summarize request failed");
            }
        }
        result
    }

    async fn run(&self, request: SummarizeRequestDto) -> Result<SummaryResponseDto, SummarizeError> {
        let style: SummaryStyle = request
            .style
            .parse()
            .map_err(|_| SummarizeError::InvalidStyle(request.style.clone()))?;

        let document = match (request.file, request.text) {
            (None, None) => return Err(SummarizeError::MissingInput),
            (Some(_), Some(_)) => return Err(SummarizeError::AmbiguousInput),
            (Some(file), None) => self.prepare_pdf(file).await?,
            (None, Some(text)) => self.prepare_text(&text)?,
        };

        if !self.summarizer.is_configured() {
            return Err(SummarizeError::ServiceUnconfigured);
        }

        let character_count = document.text.chars().count();
        info!(
            input_type = ?document.input_type,
            style = %style,
            character_count,
            "Summarizing document"
        );

        match self.summarizer.summarize(&document.text, style).await {
            SummaryResult::Success(output) => Ok(SummaryResponseDto {
                input_type: document.input_type,
                filename: document.filename,
                style,
                summary: output.summary,
                model: output.model,
                character_count,
            }),
            SummaryResult::Failure { error } => Err(SummarizeError::SummarizationFailed(error)),
        }
    }

    async fn prepare_pdf(&self, file: UploadedFile) -> Result<PreparedDocument, SummarizeError> {
        if !file.filename.ends_with(".pdf") {
            return Err(SummarizeError::UnsupportedFileType);
        }

        let too_large = SummarizeError::FileTooLarge {
            max_bytes: self.limits.max_file_size,
        };
        let data = match file.content {
            FileContent::Data(data) => data,
            FileContent::TooLarge => return Err(too_large),
            FileContent::Unreadable(reason) => return Err(SummarizeError::IoFailure(reason)),
        };
        if data.len() > self.limits.max_file_size {
            return Err(too_large);
        }

        // PDF parsing is CPU-bound; keep it off the async workers.
        let extractor = Arc::clone(&self.extractor);
        let text = tokio::task::spawn_blocking(move || extractor.extract(&data))
            .await
            .map_err(|e| SummarizeError::PdfProcessingFailed(e.to_string()))??;

        Ok(PreparedDocument {
            input_type: InputType::Pdf,
            filename: Some(file.filename),
            text,
        })
    }

    fn prepare_text(&self, text: &str) -> Result<PreparedDocument, SummarizeError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let length = text.chars().count();
        if length < self.limits.min_text_length {
            return Err(SummarizeError::TextTooShort {
                min: self.limits.min_text_length,
            });
        }
        if length > self.limits.max_text_length {
            return Err(SummarizeError::TextTooLong {
                max: self.limits.max_text_length,
            });
        }

        Ok(PreparedDocument {
            input_type: InputType::Text,
            filename: None,
            text: text.to_string(),
        })
    }
}
