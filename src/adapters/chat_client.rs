use crate::core::prompt;
use crate::domain::ports::{NarrativeRequest, NarrativeService};
use crate::utils::error::{BaziError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.deepseek.com/v1";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

/// OpenAI-compatible chat-completions client (DeepSeek by default).
pub struct ChatCompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
    settings: ChatSettings,
}

impl ChatCompletionClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        settings: ChatSettings,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            settings,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    pub fn build_messages(request: &NarrativeRequest) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: prompt::system_prompt(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: prompt::user_prompt(request),
            },
        ]
    }
}

#[async_trait]
impl NarrativeService for ChatCompletionClient {
    async fn narrate(&self, request: &NarrativeRequest) -> Result<String> {
        let url = self.completions_url();
        let body = ChatRequest {
            model: &self.settings.model,
            messages: Self::build_messages(request),
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        tracing::debug!("Calling chat completions at: {} (model {})", url, self.settings.model);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Chat completions response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BaziError::ServiceStatusError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| BaziError::MalformedResponseError {
                message: e.to_string(),
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| BaziError::MalformedResponseError {
                message: "response contained no choices".to_string(),
            })
    }
}
