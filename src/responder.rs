//! Responders that turn an [`AdviceRequest`] into advisory text.
//!
//! - [`LocalResponder`] runs the keyword classifier and templates. It never fails.
//! - [`RemoteResponder`] asks an OpenAI-compatible chat completions endpoint.
//! - [`FallbackResponder`] tries a primary responder under a deadline and
//!   answers locally when it errors or times out.

use crate::classifier::{classify, classify_prompt};
use crate::config::LlmConfig;
use crate::error::{AgriError, Result};
use crate::models::AdviceRequest;
use crate::prompts::{build_user_prompt, SYSTEM_PROMPT};
use crate::render::{render, render_conversation};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Anything that can answer an advice request
#[async_trait]
pub trait TopicResponder: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    async fn respond(&self, request: &AdviceRequest) -> Result<String>;
}

/// Deterministic keyword-and-template responder
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalResponder;

impl LocalResponder {
    /// Classify and render without going through the async trait
    pub fn advise(&self, request: &AdviceRequest) -> String {
        match request {
            AdviceRequest::Context(ctx) => render(classify(ctx.concern_signal()), ctx),
            AdviceRequest::Prompt(prompt) => render_conversation(classify_prompt(prompt)),
        }
    }
}

#[async_trait]
impl TopicResponder for LocalResponder {
    fn name(&self) -> &str {
        "local"
    }

    async fn respond(&self, request: &AdviceRequest) -> Result<String> {
        Ok(self.advise(request))
    }
}

/// OpenAI-compatible API response structures
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Upstream model responder
pub struct RemoteResponder {
    config: LlmConfig,
    client: reqwest::Client,
}

impl RemoteResponder {
    /// Create a responder from a validated configuration
    pub fn new(config: LlmConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AgriError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl TopicResponder for RemoteResponder {
    fn name(&self) -> &str {
        "remote"
    }

    async fn respond(&self, request: &AdviceRequest) -> Result<String> {
        let topic = classify(request.signal());
        let user_prompt = build_user_prompt(request, topic);

        let request_body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": user_prompt}
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens
        });

        debug!(model = %self.config.model, kind = request.kind(), "Sending LLM request");

        let response = self
            .client
            .post(self.config.completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(AgriError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AgriError::Api {
                code: status.as_u16(),
                message: format!("LLM API error: {} - {}", status, error_text),
            });
        }

        let body = response.text().await.map_err(AgriError::Network)?;
        parse_completion(&body)
    }
}

/// Extract the first choice's text from a chat completions body
fn parse_completion(body: &str) -> Result<String> {
    let api_response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| AgriError::Parse(format!("Failed to parse LLM response: {}", e)))?;

    let content = api_response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .unwrap_or_default();

    if content.is_empty() {
        return Err(AgriError::Parse("LLM response had no content".to_string()));
    }

    Ok(content)
}

/// Tries `primary` under a deadline, answers locally on any failure.
pub struct FallbackResponder {
    primary: Arc<dyn TopicResponder>,
    fallback: LocalResponder,
    timeout: Duration,
}

impl FallbackResponder {
    pub fn new(primary: Arc<dyn TopicResponder>, timeout: Duration) -> Self {
        Self {
            primary,
            fallback: LocalResponder,
            timeout,
        }
    }
}

#[async_trait]
impl TopicResponder for FallbackResponder {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn respond(&self, request: &AdviceRequest) -> Result<String> {
        let primary = self.primary.name().to_string();

        let error = match tokio::time::timeout(self.timeout, self.primary.respond(request)).await {
            Ok(Ok(text)) => {
                info!(responder = %primary, kind = request.kind(), "Primary responder answered");
                return Ok(text);
            }
            Ok(Err(e)) => e,
            Err(_) => AgriError::Timeout(self.timeout),
        };

        warn!(
            responder = %primary,
            kind = request.kind(),
            error = %error,
            "Primary responder failed, using local advice"
        );

        Ok(self.fallback.advise(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FarmingContext;
    use std::sync::Mutex;

    /// A responder that always fails.
    struct FailingResponder {
        error: fn() -> AgriError,
        calls: Mutex<usize>,
    }

    impl FailingResponder {
        fn new(error: fn() -> AgriError) -> Self {
            Self {
                error,
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl TopicResponder for FailingResponder {
        fn name(&self) -> &str {
            "failing"
        }

        async fn respond(&self, _request: &AdviceRequest) -> Result<String> {
            *self.calls.lock().unwrap() += 1;
            Err((self.error)())
        }
    }

    /// A responder that always succeeds with fixed text.
    struct CannedResponder;

    #[async_trait]
    impl TopicResponder for CannedResponder {
        fn name(&self) -> &str {
            "canned"
        }

        async fn respond(&self, _request: &AdviceRequest) -> Result<String> {
            Ok("upstream advice".to_string())
        }
    }

    /// A responder that never answers in time.
    struct HangingResponder;

    #[async_trait]
    impl TopicResponder for HangingResponder {
        fn name(&self) -> &str {
            "hanging"
        }

        async fn respond(&self, _request: &AdviceRequest) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("too late".to_string())
        }
    }

    fn rice_question() -> AdviceRequest {
        AdviceRequest::Prompt("How do I grow rice?".to_string())
    }

    fn corn_pest() -> AdviceRequest {
        AdviceRequest::Context(FarmingContext::new(
            "Corn",
            "Mindanao",
            "Dry season",
            "Sandy loam",
            "Pest Control",
        ))
    }

    #[tokio::test]
    async fn test_local_responder_structured() {
        let text = LocalResponder.respond(&corn_pest()).await.unwrap();
        assert!(text.contains("PEST & DISEASE MANAGEMENT"));
        assert!(text.contains("Fall Armyworm"));
        assert!(!text.contains("Brown Planthopper"));
        assert!(!text.contains("Panama Disease"));
    }

    #[tokio::test]
    async fn test_local_responder_prompt() {
        let text = LocalResponder.respond(&rice_question()).await.unwrap();
        assert!(text.contains("GROWING RICE (PALAY)"));
    }

    #[tokio::test]
    async fn test_primary_success_is_used() {
        let fallback = FallbackResponder::new(Arc::new(CannedResponder), Duration::from_secs(5));
        let text = fallback.respond(&rice_question()).await.unwrap();
        assert_eq!(text, "upstream advice");
    }

    #[tokio::test]
    async fn test_falls_back_on_error() {
        let failing = Arc::new(FailingResponder::new(|| AgriError::Api {
            code: 429,
            message: "quota exceeded".to_string(),
        }));
        let fallback = FallbackResponder::new(failing.clone(), Duration::from_secs(5));

        let request = rice_question();
        let text = fallback.respond(&request).await.unwrap();
        assert_eq!(text, LocalResponder.advise(&request));
        assert_eq!(failing.calls(), 1);
    }

    #[tokio::test]
    async fn test_falls_back_on_structured_error() {
        let failing = Arc::new(FailingResponder::new(|| {
            AgriError::Parse("malformed".to_string())
        }));
        let fallback = FallbackResponder::new(failing, Duration::from_secs(5));

        let request = corn_pest();
        let text = fallback.respond(&request).await.unwrap();
        assert_eq!(text, LocalResponder.advise(&request));
    }

    #[tokio::test]
    async fn test_timeout_triggers_fallback() {
        let fallback = FallbackResponder::new(Arc::new(HangingResponder), Duration::from_millis(50));
        let request = rice_question();
        let text = fallback.respond(&request).await.unwrap();
        assert_eq!(text, LocalResponder.advise(&request));
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back() {
        // nothing listens on the discard port
        let config = LlmConfig::new("http://127.0.0.1:9/v1", "sk-test", "gpt-4o-mini")
            .with_timeout(Duration::from_secs(2));
        let remote = RemoteResponder::new(config).unwrap();
        let fallback = FallbackResponder::new(Arc::new(remote), Duration::from_secs(5));

        let request = rice_question();
        let text = fallback.respond(&request).await.unwrap();
        assert_eq!(text, LocalResponder.advise(&request));
    }

    #[test]
    fn test_remote_rejects_invalid_config() {
        let config = LlmConfig::new("nope", "sk-test", "gpt-4o-mini");
        assert!(matches!(
            RemoteResponder::new(config),
            Err(AgriError::Config(_))
        ));
    }

    #[test]
    fn test_parse_completion() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "  Plant early.  "}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "Plant early.");
    }

    #[test]
    fn test_parse_completion_errors() {
        assert!(matches!(
            parse_completion(r#"{"choices": []}"#),
            Err(AgriError::Parse(_))
        ));
        assert!(matches!(
            parse_completion(r#"{"choices": [{"message": {"content": null}}]}"#),
            Err(AgriError::Parse(_))
        ));
        assert!(parse_completion("<html>502</html>").is_err());
    }
}
