// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器模块
///
/// 把 multipart 表单转换为摘要请求 DTO
pub mod summarize_form;
