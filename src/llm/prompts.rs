//! Prompt templates for summarization
//!
//! The system prompt combines a style directive (from the summary type) and
//! a language directive. Lookups go by wire name and fall back to the concise
//! style and Korean output for names they do not know.

use crate::domain::SummaryConfig;

const DEFAULT_LANGUAGE_DIRECTIVE: &str = "한국어로 답변해주세요.";
const DEFAULT_STYLE_DIRECTIVE: &str = "간결하고 핵심적인 내용으로 요약해주세요.";

/// Language directive for a language wire name
pub fn language_directive(language: &str) -> &'static str {
    match language {
        "korean" => "한국어로 답변해주세요.",
        "english" => "Please respond in English.",
        "japanese" => "日本語で答えてください。",
        _ => DEFAULT_LANGUAGE_DIRECTIVE,
    }
}

/// Style directive for a summary type wire name
pub fn style_directive(summary_type: &str) -> &'static str {
    match summary_type {
        "concise" => "간결하고 핵심적인 내용으로 요약해주세요.",
        "detailed" => "상세하고 포괄적인 내용으로 요약해주세요.",
        "bullet_points" => "주요 내용을 불릿 포인트 형태로 정리해주세요.",
        _ => DEFAULT_STYLE_DIRECTIVE,
    }
}

/// System instruction for a summarization request
pub fn system_prompt(config: &SummaryConfig) -> String {
    format!(
        "당신은 전문적인 텍스트 요약 어시스턴트입니다.\n\
         주어진 텍스트를 분석하여 핵심 내용을 추출하고 요약해주세요.\n\
         \n\
         요약 지침:\n\
         - {style}\n\
         - {language}\n\
         - 원본 텍스트의 주요 정보와 맥락을 유지해주세요.\n\
         - 불필요한 세부사항은 제거하되, 중요한 내용은 누락하지 마세요.\n\
         - 명확하고 이해하기 쉬운 문장으로 작성해주세요.",
        style = style_directive(config.summary_type().as_str()),
        language = language_directive(config.language().as_str()),
    )
}

/// User instruction carrying the text to summarize
pub fn user_prompt(text: &str) -> String {
    format!("다음 텍스트를 요약해주세요:\n\n{}", text)
}

/// Message sent by the health probe
pub const HEALTH_CHECK_PROMPT: &str = "Hello";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, SummaryType};

    #[test]
    fn known_languages_have_directives() {
        assert_eq!(language_directive("english"), "Please respond in English.");
        assert_eq!(language_directive("japanese"), "日本語で答えてください。");
        assert_eq!(language_directive("korean"), "한국어로 답변해주세요.");
    }

    #[test]
    fn unknown_names_fall_back_to_korean_concise() {
        assert_eq!(language_directive("klingon"), DEFAULT_LANGUAGE_DIRECTIVE);
        assert_eq!(style_directive("haiku"), DEFAULT_STYLE_DIRECTIVE);
    }

    #[test]
    fn every_variant_has_a_dedicated_directive() {
        for summary_type in SummaryType::ALL {
            assert!(!style_directive(summary_type.as_str()).is_empty());
        }
        assert_ne!(style_directive("detailed"), style_directive("concise"));
        assert_ne!(style_directive("bullet_points"), style_directive("concise"));
        for language in Language::ALL {
            assert!(!language_directive(language.as_str()).is_empty());
        }
    }

    #[test]
    fn system_prompt_includes_both_directives() {
        let config = SummaryConfig::builder()
            .summary_type("bullet_points")
            .language("english")
            .build()
            .unwrap();
        let prompt = system_prompt(&config);

        assert!(prompt.contains("- 주요 내용을 불릿 포인트 형태로 정리해주세요."));
        assert!(prompt.contains("- Please respond in English."));
        assert!(prompt.starts_with("당신은 전문적인 텍스트 요약 어시스턴트입니다.\n"));
    }

    #[test]
    fn user_prompt_embeds_text_verbatim() {
        let prompt = user_prompt("  keep   spacing  ");
        assert!(prompt.ends_with("\n\n  keep   spacing  "));
    }
}
