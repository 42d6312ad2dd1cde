// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 摘要风格
///
/// 固定的三种输出格式，HTTP 层以 snake_case 字符串表示
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    /// 3-4 句的简要摘要
    #[default]
    Brief,
    /// 覆盖所有主要主题的详细摘要
    Detailed,
    /// 按主题组织的要点列表
    BulletPoints,
}

/// 无法识别的摘要风格
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown summary style: {0}")]
pub struct UnknownStyle(pub String);

impl SummaryStyle {
    /// 所有风格，按对外展示顺序排列
    pub const ALL: [SummaryStyle; 3] = [
        SummaryStyle::Brief,
        SummaryStyle::Detailed,
        SummaryStyle::BulletPoints,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Brief => "brief",
            SummaryStyle::Detailed => "detailed",
            SummaryStyle::BulletPoints => "bullet_points",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SummaryStyle::Brief => "Concise 3-4 sentence summary of main points",
            SummaryStyle::Detailed => "Comprehensive summary covering all major themes",
            SummaryStyle::BulletPoints => "Structured bullet-point summary by topic",
        }
    }

    /// 以逗号分隔的全部风格名称，用于错误提示
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(SummaryStyle::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// 宽松解析：无法识别的风格回退为 `Brief`
    ///
    /// 请求入口已经严格校验过风格，这里的回退只服务于直接调用摘要客户端的代码，
    /// 正常 HTTP 流程不会走到回退分支。
    pub fn from_str_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for SummaryStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brief" => Ok(SummaryStyle::Brief),
            "detailed" => Ok(SummaryStyle::Detailed),
            "bullet_points" => Ok(SummaryStyle::BulletPoints),
            other => Err(UnknownStyle(other.to_string())),
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 被摘要文档的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Pdf,
    Text,
}

/// 一次成功摘要的产出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutput {
    pub summary: String,
    pub style: SummaryStyle,
    pub model: String,
}

/// 摘要客户端的结果
///
/// 客户端从不向上抛错，所有失败都折叠为 `Failure`，由调用方决定如何呈现。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryResult {
    Success(SummaryOutput),
    Failure { error: String },
}

impl SummaryResult {
    pub fn failure(error: impl Into<String>) -> Self {
        SummaryResult::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SummaryResult::Success(_))
    }
}

impl Serialize for SummaryResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SummaryResult::Success(output) => {
                let mut state = serializer.serialize_struct("SummaryResult", 4)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("summary", &output.summary)?;
                state.serialize_field("style", &output.style)?;
                state.serialize_field("model_used", &output.model)?;
                state.end()
            }
            SummaryResult::Failure { error } => {
                let mut state = serializer.serialize_struct("SummaryResult", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}
