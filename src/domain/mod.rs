pub mod error;
pub mod language;
pub mod llm_config;
pub mod request;
pub mod translation;
