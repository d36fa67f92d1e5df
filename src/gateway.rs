use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Client for the Keywords AI chat-completion gateway.
///
/// One best-effort POST per call: no retries and no timeout, so a hung
/// upstream blocks the calling request until the connection drops.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct RequestMetadata {
    pub agent_type: String,
    pub source: String,
}

/// Outbound payload, built fresh per request.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    pub metadata: RequestMetadata,
}

impl ChatCompletionRequest {
    /// System message first, user message second - the order the gateway
    /// expects and the only shape this backend ever sends.
    pub fn relay(model: &str, system_prompt: &str, message: &str, agent_type: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: message.to_string(),
                },
            ],
            stream: false,
            metadata: RequestMetadata {
                agent_type: agent_type.to_string(),
                source: "medilink-backend".to_string(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Non-success HTTP status from the gateway; the body is surfaced to
    /// the caller inside the reply string.
    #[error("gateway returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("gateway response has no choices")]
    MissingChoices,
}

impl GatewayClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Issue one chat-completion call and extract the reply text from
    /// `choices[0].message.content`.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<String, GatewayError> {
        debug!(
            model = %request.model,
            agent_type = %request.metadata.agent_type,
            "Sending chat completion to gateway"
        );

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Upstream { status, body });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(GatewayError::MissingChoices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_payload_is_system_then_user() {
        let request = ChatCompletionRequest::relay(
            "gemini-1.5-flash",
            "You are a triage assistant.",
            "I have a headache",
            "TRIAGE",
        );

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, "You are a triage assistant.");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "I have a headache");
    }

    #[test]
    fn relay_payload_serializes_stream_and_metadata() {
        let request =
            ChatCompletionRequest::relay("gemini-1.5-flash", "prompt", "hello", "RECOVERY");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gemini-1.5-flash");
        assert_eq!(json["stream"], false);
        assert_eq!(json["metadata"]["agent_type"], "RECOVERY");
        assert_eq!(json["metadata"]["source"], "medilink-backend");
    }
}
