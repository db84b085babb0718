//! Advisor configuration.
//!
//! Built once at startup (CLI flags with environment fallback) and passed
//! into [`crate::assistant::AgriAssistant`]. Nothing reads the environment
//! after that.

use crate::error::{AgriError, Result};
use std::time::Duration;
use url::Url;

/// Default upstream request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upstream OpenAI-compatible model configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl LlmConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            temperature: 0.7,
            max_tokens: 1500,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the configuration before any request is made
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| AgriError::Config(format!("Invalid LLM base URL '{}': {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AgriError::Config(format!(
                "LLM base URL must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.api_key.trim().is_empty() {
            return Err(AgriError::Config("LLM API key is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AgriError::Config("LLM model name is empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(AgriError::Config("LLM timeout must be positive".to_string()));
        }
        Ok(())
    }

    /// Full chat completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Top-level advisor configuration
#[derive(Debug, Clone, Default)]
pub struct AdvisorConfig {
    /// Try the upstream model before the local templates
    pub use_ai_model: bool,
    pub llm: Option<LlmConfig>,
}

impl AdvisorConfig {
    /// Local templates only
    pub fn local() -> Self {
        Self::default()
    }

    /// Upstream model with local fallback
    pub fn with_llm(llm: LlmConfig) -> Self {
        Self {
            use_ai_model: true,
            llm: Some(llm),
        }
    }

    /// Whether requests go upstream first
    pub fn remote_enabled(&self) -> bool {
        self.use_ai_model && self.llm.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LlmConfig {
        LlmConfig::new("https://api.openai.com/v1/", "sk-test", "gpt-4o-mini")
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut cfg = valid();
        cfg.base_url = "not a url".to_string();
        assert!(matches!(cfg.validate(), Err(AgriError::Config(_))));

        let mut cfg = valid();
        cfg.base_url = "ftp://example.com".to_string();
        assert!(cfg.validate().is_err());

        let mut cfg = valid();
        cfg.api_key = "  ".to_string();
        assert!(cfg.validate().is_err());

        let cfg = valid().with_timeout(Duration::ZERO);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_completions_url_trims_slash() {
        assert_eq!(
            valid().completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_remote_enabled_needs_flag_and_llm() {
        assert!(!AdvisorConfig::local().remote_enabled());
        assert!(AdvisorConfig::with_llm(valid()).remote_enabled());

        let flag_only = AdvisorConfig {
            use_ai_model: true,
            llm: None,
        };
        assert!(!flag_only.remote_enabled());
    }
}
