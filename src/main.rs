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

use docsumm::application::usecases::summarize_document::SummarizeDocumentUseCase;
use docsumm::config::settings::Settings;
use docsumm::domain::services::llm_service::{LLMService, LLMServiceTrait};
use docsumm::domain::services::text_extractor::{PdfTextExtractor, TextExtractor};
use docsumm::presentation::routes;
use docsumm::utils::telemetry;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting docsumm...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize components
    let extractor: Arc<dyn TextExtractor> = Arc::new(PdfTextExtractor::new());
    let summarizer: Arc<dyn LLMServiceTrait> = Arc::new(LLMService::new(&settings.llm)?);
    if summarizer.is_configured() {
        info!(model = %summarizer.model(), "LLM service configured");
    } else {
        warn!("LLM API key not set; /summarize will answer 500 until GROQ_API_KEY is provided");
    }

    let use_case = Arc::new(SummarizeDocumentUseCase::new(
        extractor,
        summarizer,
        settings.upload.clone(),
    ));

    // 4. Start HTTP server
    let app = routes::app(use_case, &settings.cors);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
