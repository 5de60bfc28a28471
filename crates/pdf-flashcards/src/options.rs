use crate::types::{FlashcardError, Result};
use std::time::Duration;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";

#[derive(Debug, Clone, PartialEq)]
pub struct SummarizerOptions {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Upper bound on one completion request, connect to last byte
    pub request_timeout: Duration,
}

impl Default for SummarizerOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo-instruct".to_string(),
            max_tokens: 150,
            temperature: 0.7,
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl SummarizerOptions {
    /// Defaults overlaid with `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `OPENAI_MODEL`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: non_empty(API_KEY_VAR),
            base_url: non_empty(BASE_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: non_empty(MODEL_VAR).unwrap_or(defaults.model),
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_none() {
            return Err(FlashcardError::MissingApiKey);
        }
        if self.max_tokens == 0 {
            return Err(FlashcardError::Config("max_tokens must be positive".to_string()));
        }
        if self.request_timeout.is_zero() {
            return Err(FlashcardError::Config(
                "request timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
