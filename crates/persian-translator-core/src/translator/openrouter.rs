use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::traits::{Translator, TranslatorInfo};
use crate::error::{Error, Result};

use async_trait::async_trait;

/// Fixed instruction template sent to the model ahead of the user's text
const PROMPT_TEMPLATE: &str = "Translate the following text into Persian:";

/// OpenRouter chat-completions translator.
///
/// Works with any OpenAI-compatible API: OpenRouter, DeepSeek, OpenAI,
/// llama.cpp server, Ollama, etc. One request per call, no retries.
pub struct OpenRouterTranslator {
    client: Client,
    /// Base URL for the API (e.g., "https://openrouter.ai/api/v1")
    pub api_base: String,
    /// Optional API key for authentication
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OpenRouterTranslator {
    /// Create a new OpenRouter translator.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created, which should only happen
    /// in extreme circumstances (e.g., TLS backend unavailable on the system).
    #[allow(clippy::expect_used)]
    pub fn new(api_base: String, api_key: Option<String>, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base,
            api_key,
            model,
        }
    }

    /// Create translation prompt
    fn create_prompt(text: &str) -> String {
        format!("{PROMPT_TEMPLATE}\n{text}")
    }

    /// Make a single API request and map the outcome.
    async fn request(&self, text: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: Self::create_prompt(text),
            }],
        };

        debug!("Translation request to {}", url);

        let mut req = self.client.post(&url).json(&request);

        // Add API key if configured
        if let Some(ref key) = self.api_key {
            req = req.header("Authorization", format!("Bearer {key}"));
        }

        let response = req.send().await.map_err(|e| {
            warn!("Request failed: {}", e);
            Error::Request(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("API error: {} - {}", status, body);
            return Err(Error::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse response: {}", e);
            Error::InvalidResponse(e.to_string())
        })?;

        // The translated text is returned exactly as the model produced it
        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::InvalidResponse("No choices in response".to_string()))
    }
}

#[async_trait]
impl Translator for OpenRouterTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: "OpenRouter",
            requires_api_key: true,
        }
    }

    async fn translate(&self, text: &str) -> Result<String> {
        self.request(text).await
    }
}
