// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：摘要风格、输入类型和摘要结果
/// - 服务（services）：PDF 文本提取和 LLM 摘要客户端
///
/// 领域层不依赖 HTTP 框架，只通过 trait 暴露能力。
pub mod models;
pub mod services;
