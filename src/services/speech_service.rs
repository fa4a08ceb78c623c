use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::prompt_context::{truncate_chars, SPEECH_CHAR_LIMIT},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesizes `text` and returns the encoded audio payload.
    async fn speak(&self, text: String) -> AppResult<Vec<u8>>;
}

#[derive(Debug, Serialize)]
struct SpeechBody<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
}

/// Text-to-speech over the OpenAI `audio/speech` endpoint.
pub struct OpenAiSpeechClient {
    http: reqwest::Client,
    url: String,
    api_key: SecretString,
    model: String,
    voice: String,
}

impl OpenAiSpeechClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.provider_timeout())
            .build()?;

        Ok(Self {
            http,
            url: config.speech_url(),
            api_key: config.openai_api_key.clone(),
            model: config.tts_model.clone(),
            voice: config.tts_voice.clone(),
        })
    }
}

#[async_trait]
impl SpeechProvider for OpenAiSpeechClient {
    async fn speak(&self, text: String) -> AppResult<Vec<u8>> {
        log::debug!("Requesting speech for {} chars with voice {}", text.len(), self.voice);

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&SpeechBody {
                model: &self.model,
                input: &text,
                voice: &self.voice,
            })
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to send speech request: {}", e);
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            log::error!("Speech provider returned {}: {}", status, body);
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let audio = response.bytes().await?;
        log::info!("Speech provider returned {} bytes", audio.len());
        Ok(audio.to_vec())
    }
}

/// Applies the input rules shared by every caller before reaching the provider.
pub struct SpeechSynthesizer {
    provider: Arc<dyn SpeechProvider>,
}

impl SpeechSynthesizer {
    pub fn new(provider: Arc<dyn SpeechProvider>) -> Self {
        Self { provider }
    }

    /// Blank text yields empty audio without a provider call; longer text is cut
    /// to the provider's input limit.
    pub async fn synthesize(&self, text: &str) -> AppResult<Vec<u8>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let input = truncate_chars(text, SPEECH_CHAR_LIMIT);
        self.provider.speak(input.to_string()).await
    }

    pub async fn synthesize_base64(&self, text: &str) -> AppResult<String> {
        let audio = self.synthesize(text).await?;
        Ok(STANDARD.encode(audio))
    }
}
