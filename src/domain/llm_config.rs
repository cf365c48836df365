use serde::{Deserialize, Serialize};

/// Provider call parameters. The credential is deliberately absent: it is
/// read from the environment on every request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LLMConfig {
    pub base_url: String,
    pub model: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: Some(1000),
            temperature: Some(0.3),
        }
    }
}
