use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{LlmProvider, LlmSettings};

/// Process-wide configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            rust_log: non_empty(&lookup, "RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}

/// LLM settings. Only read when enhancement runs, so a run without it is not
/// affected by a malformed `LLM_*` variable.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub max_attempts: u32,
}

impl LlmConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| non_empty(&lookup, key);

        let provider = match var("LLM_PROVIDER") {
            Some(raw) => raw
                .parse::<LlmProvider>()
                .map_err(anyhow::Error::msg)
                .context("LLM_PROVIDER is invalid")?,
            None => LlmProvider::default(),
        };

        Ok(LlmConfig {
            api_key: var(provider.api_key_var()),
            model: var("LLM_MODEL").unwrap_or_else(|| provider.default_model().to_string()),
            base_url: var("LLM_BASE_URL"),
            timeout_secs: var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            max_attempts: var("LLM_MAX_ATTEMPTS")
                .unwrap_or_else(|| "1".to_string())
                .parse::<u32>()
                .context("LLM_MAX_ATTEMPTS must be a positive integer")?
                .max(1),
            provider,
        })
    }

    /// Settings for the configured provider. Fails if its API key is unset.
    pub fn settings(&self) -> Result<LlmSettings> {
        let key_var = self.provider.api_key_var();
        let api_key = self
            .api_key
            .clone()
            .with_context(|| format!("Required environment variable '{key_var}' is not set"))?;

        Ok(LlmSettings {
            api_key,
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            max_attempts: self.max_attempts,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}
