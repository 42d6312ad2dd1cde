// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use bytes::Bytes;

/// 未提供 `style` 字段时使用的风格
pub const DEFAULT_STYLE: &str = "brief";

/// 上传文件的读取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// 完整读取的文件内容
    Data(Bytes),
    /// 文件超过大小上限，内容已丢弃
    TooLarge,
    /// 读取失败及原因
    Unreadable(String),
}

/// 上传的文件
///
/// 读取失败或超限不会立即中断请求，而是记录在 `content` 中，
/// 由用例在风格和输入校验之后再报告。
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// 客户端提供的原始文件名
    pub filename: String,
    /// 文件内容、超限标记或读取失败原因
    pub content: FileContent,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content: FileContent::Data(data.into()),
        }
    }

    pub fn too_large(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: FileContent::TooLarge,
        }
    }

    pub fn unreadable(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: FileContent::Unreadable(reason.into()),
        }
    }
}

/// 摘要请求数据传输对象
///
/// 保留原始风格字符串，校验交给用例完成
#[derive(Debug, Clone)]
pub struct SummarizeRequestDto {
    /// 请求的摘要风格
    pub style: String,
    /// 上传的 PDF 文件
    pub file: Option<UploadedFile>,
    /// 直接提交的文本
    pub text: Option<String>,
}

impl Default for SummarizeRequestDto {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            file: None,
            text: None,
        }
    }
}

impl SummarizeRequestDto {
    pub fn from_text(style: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            file: None,
            text: Some(text.into()),
        }
    }

    pub fn from_file(style: impl Into<String>, file: UploadedFile) -> Self {
        Self {
            style: style.into(),
            file: Some(file),
            text: None,
        }
    }
}
