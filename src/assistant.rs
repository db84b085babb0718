//! The advisor facade used by the console and the HTTP server.

use crate::classifier::{classify, classify_prompt};
use crate::config::AdvisorConfig;
use crate::error::Result;
use crate::models::{AdviceRequest, FarmingContext};
use crate::responder::{FallbackResponder, LocalResponder, RemoteResponder, TopicResponder};
use std::sync::Arc;
use tracing::{info, warn};

/// Agriculture assistant.
///
/// Answers are never errors: whatever the configured responder does, a
/// failure degrades to the local templates.
#[derive(Clone)]
pub struct AgriAssistant {
    responder: Arc<dyn TopicResponder>,
    local: LocalResponder,
}

impl AgriAssistant {
    /// Build an assistant for the given configuration.
    ///
    /// Fails only when AI mode is on and the LLM settings are invalid.
    pub fn new(config: AdvisorConfig) -> Result<Self> {
        let responder: Arc<dyn TopicResponder> = match config.llm {
            Some(llm) if config.use_ai_model => {
                let timeout = llm.timeout;
                info!(model = %llm.model, base_url = %llm.base_url, "AI mode enabled");
                let remote = RemoteResponder::new(llm)?;
                Arc::new(FallbackResponder::new(Arc::new(remote), timeout))
            }
            _ => {
                if config.use_ai_model {
                    warn!("AI mode requested without LLM settings, using local advice only");
                }
                Arc::new(LocalResponder)
            }
        };

        Ok(Self::with_responder(responder))
    }

    /// Local templates only
    pub fn local() -> Self {
        Self::with_responder(Arc::new(LocalResponder))
    }

    pub fn with_responder(responder: Arc<dyn TopicResponder>) -> Self {
        Self {
            responder,
            local: LocalResponder,
        }
    }

    /// Name of the active responder
    pub fn mode(&self) -> &str {
        self.responder.name()
    }

    pub async fn get_advice(&self, ctx: FarmingContext) -> String {
        self.respond(AdviceRequest::Context(ctx)).await
    }

    pub async fn ask(&self, prompt: &str) -> String {
        self.respond(AdviceRequest::Prompt(prompt.to_string())).await
    }

    pub async fn respond(&self, request: AdviceRequest) -> String {
        match self.responder.respond(&request).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    responder = self.responder.name(),
                    error = %e,
                    "Responder failed, using local advice"
                );
                self.local.advise(&request)
            }
        }
    }
}

/// Topic name the local classifier assigns to a request
pub fn topic_name(request: &AdviceRequest) -> &'static str {
    match request {
        AdviceRequest::Context(ctx) => classify(ctx.concern_signal()).as_str(),
        AdviceRequest::Prompt(prompt) => classify_prompt(prompt).as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;
    use crate::error::AgriError;
    use async_trait::async_trait;

    struct BrokenResponder;

    #[async_trait]
    impl TopicResponder for BrokenResponder {
        fn name(&self) -> &str {
            "broken"
        }

        async fn respond(&self, _request: &AdviceRequest) -> Result<String> {
            Err(AgriError::Timeout(std::time::Duration::from_secs(30)))
        }
    }

    #[tokio::test]
    async fn test_local_assistant_scenario() {
        let assistant = AgriAssistant::local();
        assert_eq!(assistant.mode(), "local");

        let ctx = FarmingContext::new("Rice", "Central Luzon", "Wet season", "Clay", "Water Management");
        let text = assistant.get_advice(ctx).await;
        assert!(text.contains("WATER MANAGEMENT ANALYSIS"));
        assert!(text.contains("Central Luzon"));
    }

    #[tokio::test]
    async fn test_raw_errors_never_reach_caller() {
        let assistant = AgriAssistant::with_responder(Arc::new(BrokenResponder));
        let text = assistant.ask("How do I grow rice?").await;
        assert_eq!(
            text,
            LocalResponder.advise(&AdviceRequest::Prompt("How do I grow rice?".to_string()))
        );
    }

    #[test]
    fn test_new_selects_responder() {
        assert_eq!(AgriAssistant::new(AdvisorConfig::local()).unwrap().mode(), "local");

        let llm = LlmConfig::new("https://api.openai.com/v1", "sk-test", "gpt-4o-mini");
        let assistant = AgriAssistant::new(AdvisorConfig::with_llm(llm.clone())).unwrap();
        assert_eq!(assistant.mode(), "fallback");

        let disabled = AdvisorConfig {
            use_ai_model: false,
            llm: Some(llm),
        };
        assert_eq!(AgriAssistant::new(disabled).unwrap().mode(), "local");
    }

    #[test]
    fn test_new_rejects_invalid_llm() {
        let llm = LlmConfig::new("https://api.openai.com/v1", "", "gpt-4o-mini");
        assert!(AgriAssistant::new(AdvisorConfig::with_llm(llm)).is_err());
    }

    #[test]
    fn test_topic_name() {
        let ctx = FarmingContext::new("Corn", "", "", "", "Pest Control");
        assert_eq!(topic_name(&AdviceRequest::Context(ctx)), "pest_disease");
        assert_eq!(
            topic_name(&AdviceRequest::Prompt("hello".to_string())),
            "greeting"
        );
    }
}
