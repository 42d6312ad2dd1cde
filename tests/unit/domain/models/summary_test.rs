// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use docsumm::domain::models::summary::{
        InputType, SummaryOutput, SummaryResult, SummaryStyle, UnknownStyle,
    };
    use serde_json::json;

    #[test]
    fn test_style_parsing_is_exact() {
        assert_eq!("brief".parse::<SummaryStyle>(), Ok(SummaryStyle::Brief));
        assert_eq!(
            "detailed".parse::<SummaryStyle>(),
            Ok(SummaryStyle::Detailed)
        );
        assert_eq!(
            "bullet_points".parse::<SummaryStyle>(),
            Ok(SummaryStyle::BulletPoints)
        );
        assert_eq!(
            "Brief".parse::<SummaryStyle>(),
            Err(UnknownStyle("Brief".to_string()))
        );
        assert!("bullet-points".parse::<SummaryStyle>().is_err());
        assert!("".parse::<SummaryStyle>().is_err());
    }

    #[test]
    fn test_lenient_parsing_falls_back_to_brief() {
        assert_eq!(
            SummaryStyle::from_str_or_default("haiku"),
            SummaryStyle::Brief
        );
        assert_eq!(
            SummaryStyle::from_str_or_default("detailed"),
            SummaryStyle::Detailed
        );
    }

    #[test]
    fn test_style_display_matches_wire_name() {
        for style in SummaryStyle::ALL {
            assert_eq!(style.to_string(), style.as_str());
            assert_eq!(json!(style), json!(style.as_str()));
        }
        assert_eq!(SummaryStyle::choices(), "brief, detailed, bullet_points");
    }

    #[test]
    fn test_input_type_serialization() {
        assert_eq!(json!(InputType::Pdf), json!("pdf"));
        assert_eq!(json!(InputType::Text), json!("text"));
    }

    #[test]
    fn test_summary_result_serialization() {
        let success = SummaryResult::Success(SummaryOutput {
            summary: "Short.".to_string(),
            style: SummaryStyle::BulletPoints,
            model: "llama-3.3-70b-versatile".to_string(),
        });
        assert!(success.is_success());
        assert_eq!(
            serde_json::to_value(&success).unwrap(),
            json!({
                "success": true,
                "summary": "Short.",
                "style": "bullet_points",
                "model_used": "llama-3.3-70b-versatile"
            })
        );

        let failure = SummaryResult::failure("Summarization failed: timeout");
        assert!(!failure.is_success());
        assert_eq!(
            serde_json::to_value(&failure).unwrap(),
            json!({
                "success": false,
                "error": "Summarization failed: timeout"
            })
        );
    }
}
