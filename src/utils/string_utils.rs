//! # 문자열 유틸리티
//!
//! 입력 정리와 검색어 처리에 쓰는 공통 함수들입니다.

use serde::Deserialize;
use validator::ValidationError;

/// 공백만 있는 문자열은 None으로 정리합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 이메일 비교용 정규화 (앞뒤 공백 제거 + 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 정규식 메타문자를 이스케이프합니다. 검색어를 MongoDB `$regex`에 넣기 전에 사용합니다.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '#' | '-'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

/// 대소문자를 무시한 부분 문자열 포함 여부
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `validator` 커스텀 규칙: 공백만 있는 값을 거부합니다.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("공백만 입력할 수 없습니다".into()));
    }
    Ok(())
}

pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Goblin").is_ok());
        assert!(validate_not_blank(" a ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank(" \t\n").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Fan@Example.COM "), "fan@example.com");
    }

    #[test]
    fn test_escape_regex() {
        assert_eq!(escape_regex("Mr. Sunshine"), "Mr\\. Sunshine");
        assert_eq!(escape_regex("(K)-pop*"), "\\(K\\)\\-pop\\*");
        assert_eq!(escape_regex("사랑"), "사랑");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Crash Landing on You", "landing"));
        assert!(contains_ignore_case("BTS", "bts"));
        assert!(!contains_ignore_case("Goblin", "vincenzo"));
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct SearchQuery {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            search: Option<String>,
        }

        let result: SearchQuery = serde_json::from_str(r#"{"search": "  사랑  "}"#).unwrap();
        assert_eq!(result.search, Some("사랑".to_string()));

        let result: SearchQuery = serde_json::from_str(r#"{"search": "   "}"#).unwrap();
        assert_eq!(result.search, None);

        let result: SearchQuery = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.search, None);
    }
}
