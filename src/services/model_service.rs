use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{config::Config, errors::AppResult};

/// One system/user exchange sent to the chat model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: Option<String>,
    pub user: String,
}

impl ChatPrompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            user: user.into(),
        }
    }

    pub fn user_only(user: impl Into<String>) -> Self {
        Self {
            system: None,
            user: user.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Returns the completion text, or `None` when the model produced no content.
    async fn complete(&self, prompt: ChatPrompt) -> AppResult<Option<String>>;
}

#[derive(Debug, Serialize)]
struct CompletionBody {
    model: String,
    messages: Vec<CompletionMessage>,
}

#[derive(Debug, Serialize)]
struct CompletionMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionReplyMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionBody {
    fn from_prompt(model: &str, prompt: ChatPrompt) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = prompt.system {
            messages.push(CompletionMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(CompletionMessage {
            role: "user",
            content: prompt.user,
        });

        Self {
            model: model.to_string(),
            messages,
        }
    }
}

/// Chat completions against the OpenAI API.
pub struct OpenAiChatModel {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiChatModel {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(config.openai_api_base.as_str());

        Self {
            client: Client::with_config(openai_config),
            model: config.chat_model.clone(),
            timeout: config.provider_timeout(),
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, prompt: ChatPrompt) -> AppResult<Option<String>> {
        log::debug!(
            "Requesting chat completion from {} (system: {} chars, user: {} chars)",
            self.model,
            prompt.system.as_deref().map(str::len).unwrap_or(0),
            prompt.user.len()
        );

        let body = CompletionBody::from_prompt(&self.model, prompt);
        let reply: CompletionReply =
            tokio::time::timeout(self.timeout, self.client.chat().create_byot(body))
                .await?
                .map_err(|e| {
                    log::error!("Chat completion failed: {}", e);
                    e
                })?;

        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        log::info!(
            "Chat completion returned {} chars",
            content.as_deref().map(str::len).unwrap_or(0)
        );
        Ok(content)
    }
}
