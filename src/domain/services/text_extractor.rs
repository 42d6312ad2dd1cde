// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use lopdf::Document;
use thiserror::Error;
use tracing::{debug, warn};

/// 文本提取错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// 字节内容无法解析为 PDF
    #[error("Failed to parse PDF: {0}")]
    MalformedDocument(String),

    /// PDF 可以解析，但没有可提取的文本（例如没有 OCR 层的扫描件）
    #[error("Could not extract text from PDF. Please ensure the PDF contains selectable text.")]
    NoTextExtracted,
}

/// 文本提取器特质
///
/// 实现为同步调用，调用方负责把它放到阻塞线程池中执行
pub trait TextExtractor: Send + Sync {
    /// 从原始文档字节中提取纯文本
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 去除首尾空白后的非空文本
    /// * `Err(ExtractionError)` - 解析失败或没有文本
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// 基于 lopdf 的 PDF 文本提取器
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let document = Document::load_mem(bytes)
            .map_err(|e| ExtractionError::MalformedDocument(e.to_string()))?;

        // get_pages is keyed by page number, so iteration is already in page order
        let pages = document.get_pages();
        let mut fragments = Vec::with_capacity(pages.len());
        let mut readable_pages = 0usize;
        let mut first_error = None;

        for page_number in pages.keys().copied() {
            match document.extract_text(&[page_number]) {
                Ok(text) => {
                    readable_pages += 1;
                    if text.trim().is_empty() {
                        debug!(page = page_number, "Page has no extractable text");
                    } else {
                        fragments.push(text);
                    }
                }
                Err(e) => {
                    warn!(page = page_number, error = %e, "Failed to extract text from page");
                    first_error.get_or_insert_with(|| e.to_string());
                }
            }
        }

        // Every page failed to decode: the document is broken, not merely image-only.
        if readable_pages == 0 {
            if let Some(reason) = first_error {
                return Err(ExtractionError::MalformedDocument(reason));
            }
        }

        let joined = fragments.join("\n");
        let text = joined.trim();
        if text.is_empty() {
            return Err(ExtractionError::NoTextExtracted);
        }

        debug!(
            pages = pages.len(),
            characters = text.chars().count(),
            "Extracted text from PDF"
        );
        Ok(text.to_string())
    }
}
