use crate::domain::error::{AppError, Result};
use crate::domain::language::language_name;
use crate::domain::llm_config::LLMConfig;
use crate::domain::request::{TranslateRequest, TranslateResponse};
use crate::infrastructure::config::CredentialSource;
use crate::infrastructure::llm_clients::LLMClient;
use crate::infrastructure::response::clean_translation;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

pub fn build_system_prompt(source: &str, target: &str) -> String {
    format!(
        "You are a professional translator. Translate the following text from {} to {}. Return ONLY the translation. Do not include any explanations, notes, or quotation marks around the output unless they are in the original text.",
        source, target
    )
}

/// Stateless translation pipeline behind `POST /api/translate`.
pub struct TranslateUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
    credentials: Arc<dyn CredentialSource + Send + Sync>,
    config: LLMConfig,
    strict_languages: bool,
}

impl TranslateUseCase {
    pub fn new(
        llm_client: Arc<dyn LLMClient + Send + Sync>,
        credentials: Arc<dyn CredentialSource + Send + Sync>,
        config: LLMConfig,
        strict_languages: bool,
    ) -> Self {
        Self {
            llm_client,
            credentials,
            config,
            strict_languages,
        }
    }

    pub async fn execute(&self, request: &TranslateRequest) -> Result<TranslateResponse> {
        request.validate().map_err(|errors| {
            warn!(errors = %errors, "Rejected translate request");
            AppError::BadRequest(String::new())
        })?;

        let source = self.resolve_language(&request.source_lang)?;
        let target = self.resolve_language(&request.target_lang)?;

        let api_key = self.credentials.api_key().ok_or_else(|| {
            AppError::Misconfigured("provider API key is not set".to_string())
        })?;

        info!(
            source_lang = %request.source_lang,
            target_lang = %request.target_lang,
            chars = request.text.chars().count(),
            model = %self.config.model,
            "Translating"
        );

        let system_prompt = build_system_prompt(&source, &target);
        let raw = self
            .llm_client
            .generate(&self.config, &api_key, &system_prompt, &request.text)
            .await?;

        Ok(TranslateResponse {
            translation: clean_translation(&raw),
        })
    }

    fn resolve_language(&self, code: &str) -> Result<String> {
        match language_name(code) {
            Some(name) => Ok(name.to_string()),
            None if self.strict_languages => Err(AppError::BadRequest(format!(
                "Unsupported language: {}",
                code
            ))),
            None => {
                warn!(code = %code, "Unknown language code passed through to prompt");
                Ok(code.to_string())
            }
        }
    }
}
