use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/translate`.
///
/// Missing fields deserialize as empty strings so that they fail validation
/// instead of JSON extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "sourceLang is required"))]
    pub source_lang: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "targetLang is required"))]
    pub target_lang: String,
}

impl TranslateRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let req: TranslateRequest = serde_json::from_str(r#"{"text":"Hello"}"#).unwrap();
        assert_eq!(req.text, "Hello");
        assert!(req.source_lang.is_empty());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let req: TranslateRequest =
            serde_json::from_str(r#"{"text":"Hello","sourceLang":"en","targetLang":"pt"}"#)
                .unwrap();
        assert_eq!(req, TranslateRequest::new("Hello", "en", "pt"));
        assert!(req.validate().is_ok());
    }
}
