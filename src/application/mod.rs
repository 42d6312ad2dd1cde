// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求/响应 DTO 和摘要用例
/// 用例负责编排校验、文本提取和 LLM 调用，不关心 HTTP 细节
pub mod dto;
pub mod usecases;
