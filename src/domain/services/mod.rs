// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - LLM服务（llm_service）：构造提示词并调用外部补全接口生成摘要
/// - 文本提取服务（text_extractor）：从 PDF 字节中按页提取纯文本
pub mod llm_service;
pub mod text_extractor;
