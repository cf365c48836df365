use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "translator.toml";
pub const ENV_PREFIX: &str = "TRANSLATOR_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub base_url: String,
    pub model: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    /// Name of the environment variable holding the bearer credential.
    pub api_key_env: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        let llm = LLMConfig::default();
        Self {
            base_url: llm.base_url,
            model: llm.model,
            max_tokens: llm.max_tokens,
            temperature: llm.temperature,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

impl ProviderSettings {
    pub fn llm_config(&self) -> LLMConfig {
        LLMConfig {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Reject language codes missing from the language table instead of
    /// passing them through to the prompt.
    pub strict_languages: bool,
    pub provider: ProviderSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            strict_languages: true,
            provider: ProviderSettings::default(),
        }
    }
}

impl Settings {
    /// Defaults, then `translator.toml`, then `TRANSLATOR_*` variables
    /// (`__` separates nested keys, e.g. `TRANSLATOR_PROVIDER__MODEL`).
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(DEFAULT_CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> Result<Self> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        figment
            .extract()
            .map_err(|e| AppError::Internal(format!("Invalid configuration: {}", e)))
    }
}

/// Where the provider credential comes from. Consulted on every request.
pub trait CredentialSource {
    fn api_key(&self) -> Option<String>;
}

pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: &str) -> Self {
        Self {
            var: var.to_string(),
        }
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

/// Fixed credential, for embedding the proxy where the key is already known.
pub struct StaticCredential(pub Option<String>);

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.0.clone().filter(|key| !key.trim().is_empty())
    }
}
