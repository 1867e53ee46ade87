//! OpenAI chat-completion client
//!
//! Sends a single filled prompt to the chat-completions endpoint and returns
//! the completion value unmodified.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::OpenAiConfig;
use crate::error::{AppError, AppResult};

/// Chat-completion API client
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// The provider completion value, passed through to the client as-is
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletion {
    pub id: String,
    pub model: String,
    pub choices: Vec<ChatChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub index: u32,
    pub message: ChatMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Token accounting reported by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl OpenAiClient {
    /// Create a new OpenAiClient from the provider configuration
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.api_endpoint.clone(),
            model: config.model.clone(),
        }
    }

    /// Submit a prompt as a single user message and return the completion.
    ///
    /// Provider failures (network, auth, quota) are not recovered here; they
    /// surface to the handler as a generic server error.
    pub async fn complete(&self, prompt: &str) -> AppResult<ChatCompletion> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::NarrativeProvider(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::NarrativeProvider(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| AppError::NarrativeProvider(format!("failed to decode response: {}", e)))?;

        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_model_and_single_user_message() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "report the weather".to_string(),
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"].as_array().unwrap().len(), 1);
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn decodes_completion_response() {
        let body = r#"{
            "id": "chatcmpl-abc123",
            "object": "chat.completion",
            "created": 1717000000,
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Expect light rain; bring a jacket."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 60, "completion_tokens": 25, "total_tokens": 85}
        }"#;

        let completion: ChatCompletion = serde_json::from_str(body).unwrap();
        assert_eq!(completion.id, "chatcmpl-abc123");
        assert_eq!(completion.choices.len(), 1);
        assert_eq!(completion.choices[0].message.role, "assistant");
        assert_eq!(completion.usage.as_ref().unwrap().total_tokens, 85);
    }
}
