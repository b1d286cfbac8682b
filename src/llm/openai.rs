//! OpenAI chat-completions client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::llm::client::LlmProvider;
use crate::llm::prompts::{build_report_prompt, SYSTEM_PROMPT};
use crate::report::AnalysisRequest;
use crate::{CallsightError, Result};

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClient {
    /// Create a client for one credential. The key is held by this client
    /// only and sent as a bearer token per request.
    pub fn new(api_key: &str, endpoint: &str) -> Result<Self> {
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(CallsightError::Config(
                "OpenAI API key is missing. Pass --api-key, set llm.api_key in config, or CALLSIGHT_OPENAI_API_KEY.".to_string(),
            ));
        }

        let endpoint = if endpoint.trim().is_empty() {
            DEFAULT_OPENAI_ENDPOINT.to_string()
        } else {
            endpoint.trim().trim_end_matches('/').to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .map_err(|e| CallsightError::Transport(e.to_string()))?,
            api_key,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn complete(&self, request: &AnalysisRequest) -> Result<String> {
        let body = ChatCompletionRequest {
            model: request.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_report_prompt(&request.transcript_text),
                },
            ],
        };

        tracing::debug!(model = %request.model_name, "sending completion request");

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CallsightError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(CallsightError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CallsightError::Transport(format!("Failed to decode completion response: {e}")))?;

        payload
            .choices
            .into_iter()
            .filter_map(|c| c.message.content)
            .find(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                CallsightError::MalformedReply("completion reply contained no message content".to_string())
            })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(
            OpenAiClient::new("", ""),
            Err(CallsightError::Config(_))
        ));
    }

    #[test]
    fn endpoint_defaults_and_trims() {
        let client = OpenAiClient::new("sk-test", "").unwrap();
        assert_eq!(
            client.request_url(),
            "https://api.openai.com/v1/chat/completions"
        );

        let client = OpenAiClient::new("sk-test", "http://localhost:8080/v1/ ").unwrap();
        assert_eq!(client.request_url(), "http://localhost:8080/v1/chat/completions");
    }
}
