pub mod openai;

use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use async_trait::async_trait;
use reqwest::StatusCode;

pub use openai::OpenAIClient;

#[async_trait]
pub trait LLMClient {
    /// Sends a system+user prompt pair and returns the generated text.
    /// An empty string is a valid answer.
    async fn generate(
        &self,
        config: &LLMConfig,
        api_key: &str,
        system: &str,
        user: &str,
    ) -> Result<String>;
}

/// Maps a non-success provider response onto the error taxonomy.
pub fn classify_provider_error(status: StatusCode, body: &str) -> AppError {
    let detail = format!("API error ({}): {}", status, body);

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return AppError::Unauthorized(detail);
    }

    if status == StatusCode::TOO_MANY_REQUESTS
        || body.contains("insufficient_quota")
        || body.contains("rate_limit_exceeded")
    {
        return AppError::RateLimited(detail);
    }

    AppError::Upstream(detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failures() {
        assert!(matches!(
            classify_provider_error(StatusCode::UNAUTHORIZED, "{}"),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            classify_provider_error(StatusCode::FORBIDDEN, "{}"),
            AppError::Unauthorized(_)
        ));
    }

    #[test]
    fn test_rate_limit_by_status_or_code() {
        assert!(matches!(
            classify_provider_error(StatusCode::TOO_MANY_REQUESTS, ""),
            AppError::RateLimited(_)
        ));
        let body = r#"{"error":{"code":"insufficient_quota","message":"You exceeded your quota"}}"#;
        assert!(matches!(
            classify_provider_error(StatusCode::BAD_REQUEST, body),
            AppError::RateLimited(_)
        ));
    }

    #[test]
    fn test_everything_else_is_upstream() {
        let err = classify_provider_error(StatusCode::BAD_GATEWAY, "bad gateway");
        assert_eq!(
            err,
            AppError::Upstream("API error (502 Bad Gateway): bad gateway".to_string())
        );
    }
}
