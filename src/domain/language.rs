use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Supported languages. Fixed for the lifetime of the process.
pub static LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ru", name: "Russian" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "nl", name: "Dutch" },
    Language { code: "tr", name: "Turkish" },
    Language { code: "pl", name: "Polish" },
    Language { code: "sv", name: "Swedish" },
    Language { code: "th", name: "Thai" },
    Language { code: "vi", name: "Vietnamese" },
    Language { code: "el", name: "Greek" },
    Language { code: "id", name: "Indonesian" },
];

pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

pub fn language_name(code: &str) -> Option<&'static str> {
    find_language(code).map(|lang| lang.name)
}

pub fn is_supported(code: &str) -> bool {
    find_language(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_known_code() {
        assert_eq!(language_name("pt"), Some("Portuguese"));
        assert_eq!(find_language("ja").map(|l| l.name), Some("Japanese"));
    }

    #[test]
    fn test_lookup_unknown_code() {
        assert_eq!(language_name("xx"), None);
        assert!(!is_supported(""));
        // Codes are matched exactly
        assert!(!is_supported("EN"));
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = LANGUAGES.iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), LANGUAGES.len());
    }
}
