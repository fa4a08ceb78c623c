use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

/// JSON body ceiling. Whole extracted documents are posted as context and
/// truncated only after parsing.
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 50 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub chat_model: String,
    pub tts_model: String,
    pub tts_voice: String,
    pub provider_timeout_secs: u64,
    pub chat_history_limit: usize,
    pub chat_session_limit: usize,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub max_request_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            chat_model: env::var("OPENAI_CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            tts_model: env::var("OPENAI_TTS_MODEL").unwrap_or_else(|_| "tts-1".to_string()),
            tts_voice: env::var("OPENAI_TTS_VOICE").unwrap_or_else(|_| "nova".to_string()),
            provider_timeout_secs: parse_env("PROVIDER_TIMEOUT_SECS", 120),
            chat_history_limit: parse_env("CHAT_HISTORY_LIMIT", 40),
            chat_session_limit: parse_env("CHAT_SESSION_LIMIT", 1000),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "leeai-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parse_env("WEB_SERVER_PORT", 8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            max_request_bytes: parse_env("MAX_REQUEST_BYTES", DEFAULT_MAX_REQUEST_BYTES),
        }
    }

    /// Rejects configurations that cannot reach the provider at all.
    pub fn validate(&self) -> AppResult<()> {
        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ValidationError(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }

        if self.provider_timeout_secs == 0 {
            return Err(AppError::ValidationError(
                "PROVIDER_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        if self.chat_history_limit == 0 || self.chat_session_limit == 0 {
            return Err(AppError::ValidationError(
                "CHAT_HISTORY_LIMIT and CHAT_SESSION_LIMIT must be greater than zero".to_string(),
            ));
        }

        if self.max_request_bytes == 0 {
            return Err(AppError::ValidationError(
                "MAX_REQUEST_BYTES must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    pub fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.openai_api_base.trim_end_matches('/'))
    }

    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test-key".to_string()),
            openai_api_base: "http://127.0.0.1:9/v1".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            tts_model: "tts-1".to_string(),
            tts_voice: "nova".to_string(),
            provider_timeout_secs: 5,
            chat_history_limit: 6,
            chat_session_limit: 4,
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "leeai-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
