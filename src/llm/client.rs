//! Completion provider seam.

use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;
use crate::report::AnalysisRequest;
use crate::{CallsightError, Result};

/// A hosted chat-completion provider.
///
/// One request in, the raw reply text out. No retries, no streaming.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, request: &AnalysisRequest) -> Result<String>;
}

/// Build an LLM provider from runtime settings and an explicit credential.
///
/// The credential is threaded through as a parameter rather than held in
/// any process-global state.
pub fn build_provider(settings: &Settings, api_key: &str) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::new(api_key, &settings.llm.endpoint)?)),
        other => Err(CallsightError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ))),
    }
}
