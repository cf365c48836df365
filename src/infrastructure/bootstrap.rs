use std::sync::Arc;

use tracing::{info, warn};

use crate::application::TranslateUseCase;
use crate::infrastructure::config::{CredentialSource, EnvCredential, Settings};
use crate::infrastructure::llm_clients::OpenAIClient;

/// Wires the proxy's translation pipeline from settings.
///
/// A missing credential is reported but not fatal: requests answer with the
/// misconfiguration error until the variable is set.
pub fn build_translate_use_case(settings: &Settings) -> Arc<TranslateUseCase> {
    let credentials = EnvCredential::new(&settings.provider.api_key_env);

    if credentials.api_key().is_none() {
        warn!(
            api_key_env = %settings.provider.api_key_env,
            "Provider API key is not set; translations will fail until it is"
        );
    }

    info!(
        base_url = %settings.provider.base_url,
        model = %settings.provider.model,
        strict_languages = settings.strict_languages,
        "Translation provider configured"
    );

    Arc::new(TranslateUseCase::new(
        Arc::new(OpenAIClient::new()),
        Arc::new(credentials),
        settings.provider.llm_config(),
        settings.strict_languages,
    ))
}
