// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, error};

use crate::config::settings::LlmSettings;
use crate::domain::models::summary::{SummaryOutput, SummaryResult, SummaryStyle};

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_API_BASE_URL: &str = "https://api.groq.com/openai/v1";

const SYSTEM_PROMPT: &str = "You are a professional document analyst. Provide clear, accurate summaries based on the requested format.";
const TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 1500;

#[async_trait]
pub trait LLMServiceTrait: Send + Sync {
    /// API 密钥是否可用
    fn is_configured(&self) -> bool;

    /// 实际使用的模型名称
    fn model(&self) -> &str;

    /// 生成摘要，失败时返回 `SummaryResult::Failure` 而不是错误
    async fn summarize(&self, text: &str, style: SummaryStyle) -> SummaryResult;
}

/// LLM服务 - 通过 OpenAI 兼容的 `/chat/completions` 接口生成文档摘要
///
/// # 配置
///
/// 由 [`LlmSettings`] 提供：
/// - `api_key` - API密钥，为空时 `is_configured` 返回 false
/// - `model` - 使用的模型名称（默认为 llama-3.3-70b-versatile）
/// - `api_base_url` - API基础URL（默认为 Groq）
/// - `timeout_secs` - 单次请求超时
///
/// 每次调用只发出一个请求，不做重试。
pub struct LLMService {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

#[async_trait]
impl LLMServiceTrait for LLMService {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn summarize(&self, text: &str, style: SummaryStyle) -> SummaryResult {
        LLMService::summarize(self, text, style).await
    }
}

impl LLMService {
    pub fn new(settings: &LlmSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client for LLM API")?;

        Ok(Self {
            client,
            api_key: settings
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
            model: settings.model.clone(),
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn new_with_config(api_key: String, model: String, api_base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: Some(api_key).filter(|key| !key.trim().is_empty()),
            model,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 使用LLM为文档生成指定风格的摘要
    ///
    /// # 参数
    /// * `text` - 文档全文，原样嵌入提示词
    /// * `style` - 摘要风格
    ///
    /// # 返回值
    /// * `SummaryResult::Success` - 生成的摘要和模型名称
    /// * `SummaryResult::Failure` - 未配置密钥、网络错误或接口错误，附带原始错误信息
    pub async fn summarize(&self, text: &str, style: SummaryStyle) -> SummaryResult {
        let prompt = build_prompt(text, style);

        match self.request_completion(&prompt).await {
            Ok(summary) => {
                debug!(
                    model = %self.model,
                    style = %style,
                    summary_chars = summary.chars().count(),
                    "LLM summary generated"
                );
                SummaryResult::Success(SummaryOutput {
                    summary,
                    style,
                    model: self.model.clone(),
                })
            }
            Err(e) => {
                error!(model = %self.model, error = %format!("{:#}", e), "LLM summarization failed");
                SummaryResult::failure(format!("Summarization failed: {:#}", e))
            }
        }
    }

    async fn request_completion(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("LLM API key not configured"))?;

        let request_body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS
        });

        let url = format!("{}/chat/completions", self.api_base_url);
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to LLM API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "LLM API returned error: {} - {}",
                status,
                error_text
            ));
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse LLM API response")?;

        body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("Invalid response format from LLM API"))
    }
}

/// 按风格构造用户提示词，文档全文原样嵌入
pub fn build_prompt(text: &str, style: SummaryStyle) -> String {
    match style {
        SummaryStyle::Brief => format!(
            "Provide a concise summary of the following document in 3-4 sentences, \
             capturing only the main points:\n\n{text}\n\nSummary:"
        ),
        SummaryStyle::Detailed => format!(
            "Provide a comprehensive summary of the following document, covering all major \
             themes, key arguments, and important details:\n\n{text}\n\nDetailed Summary:"
        ),
        SummaryStyle::BulletPoints => format!(
            "Summarize the following document as a structured list of bullet points, \
             organizing information by topics or themes:\n\n{text}\n\n\
             Provide the summary in this format:\n\
             • [Main point 1]\n\
             • [Main point 2]\n\
             • [Main point 3]\n\
             ..."
        ),
    }
}
