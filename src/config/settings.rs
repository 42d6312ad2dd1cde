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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::services::llm_service::{DEFAULT_API_BASE_URL, DEFAULT_MODEL};

/// 默认上传文件大小上限（5 MiB）
pub const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
/// 纯文本输入的最小字符数
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 50;
/// 纯文本输入的最大字符数
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 50_000;
/// 默认请求体上限（字节），超过时框架直接返回 413
pub const DEFAULT_MAX_REQUEST_SIZE: usize = 64 * 1024 * 1024;

/// 应用程序配置设置
///
/// 包含服务器、LLM、上传限制和跨域等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// LLM 服务配置
    pub llm: LlmSettings,
    /// 上传与文本长度限制
    pub upload: UploadSettings,
    /// 跨域配置
    pub cors: CorsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// LLM 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    /// API 密钥，未设置时摘要请求返回 500
    pub api_key: Option<String>,
    /// 模型名称
    pub model: String,
    /// OpenAI 兼容接口的基础 URL
    pub api_base_url: String,
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 上传限制配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    /// 上传文件的最大字节数
    pub max_file_size: usize,
    /// 文本输入的最小字符数（去除首尾空白后）
    pub min_text_length: usize,
    /// 文本输入的最大字符数（去除首尾空白后）
    pub max_text_length: usize,
    /// 整个请求体的最大字节数，文件超出 `max_file_size` 的部分在此范围内会被读取并丢弃
    #[serde(default = "default_max_request_size")]
    pub max_request_size: usize,
}

fn default_max_request_size() -> usize {
    DEFAULT_MAX_REQUEST_SIZE
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            max_request_size: DEFAULT_MAX_REQUEST_SIZE,
        }
    }
}

/// 跨域配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// 前端地址
    pub frontend_url: String,
    /// 额外允许的来源
    #[serde(default)]
    pub extra_origins: Vec<String>,
}

impl CorsSettings {
    /// 返回去重后的允许来源列表，前端地址排在首位
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![self.frontend_url.clone()];
        for origin in &self.extra_origins {
            if !origins.contains(origin) {
                origins.push(origin.clone());
            }
        }
        origins
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/` 目录下的配置文件和 `DOCSUMM__` 前缀的环境变量。
    /// 为兼容已有部署，`GROQ_API_KEY` 和 `FRONTEND_URL` 也会被读取，但优先级低于
    /// `DOCSUMM__LLM__API_KEY` 和 `DOCSUMM__CORS__FRONTEND_URL`。
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let mut builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Default LLM settings
            .set_default("llm.model", DEFAULT_MODEL)?
            .set_default("llm.api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("llm.timeout_secs", 60)?
            // Default upload limits
            .set_default("upload.max_file_size", DEFAULT_MAX_FILE_SIZE as i64)?
            .set_default("upload.min_text_length", DEFAULT_MIN_TEXT_LENGTH as i64)?
            .set_default("upload.max_text_length", DEFAULT_MAX_TEXT_LENGTH as i64)?
            .set_default("upload.max_request_size", DEFAULT_MAX_REQUEST_SIZE as i64)?
            // Default CORS settings
            .set_default("cors.frontend_url", "http://localhost:5173")?
            .set_default(
                "cors.extra_origins",
                vec![
                    "http://localhost:5173",
                    "http://localhost:3000",
                    "https://worko-ai-assignment-ten.vercel.app",
                ],
            )?;

        if let Ok(api_key) = std::env::var("GROQ_API_KEY") {
            builder = builder.set_default("llm.api_key", api_key)?;
        }
        if let Ok(frontend_url) = std::env::var("FRONTEND_URL") {
            builder = builder.set_default("cors.frontend_url", frontend_url)?;
        }

        builder
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("DOCSUMM")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.extra_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
