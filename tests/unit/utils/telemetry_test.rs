// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use docsumm::utils::telemetry;

    #[test]
    fn test_telemetry_initialization() {
        // 初始化遥测系统
        telemetry::init_telemetry();

        tracing::debug!("This is a debug message");
        tracing::info!(
            input_type = "text",
            style = "brief",
            character_count = 120,
            "Summarizing document"
        );
        tracing::warn!(error = "Text input cannot be empty", "Summarize request rejected");
    }

    #[test]
    fn test_telemetry_initialization_is_idempotent() {
        telemetry::init_telemetry();
        telemetry::init_telemetry();
    }
}
