// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::summary::{InputType, SummaryStyle};

/// 摘要响应数据传输对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponseDto {
    /// 输入来源（pdf 或 text）
    pub input_type: InputType,
    /// 上传文件名，文本输入时为 null
    pub filename: Option<String>,
    /// 摘要风格
    pub style: SummaryStyle,
    /// 生成的摘要
    pub summary: String,
    /// 生成摘要所用的模型
    pub model: String,
    /// 实际送去摘要的文本字符数（提取并去除首尾空白之后）
    pub character_count: usize,
}
