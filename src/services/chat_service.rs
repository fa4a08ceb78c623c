use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::ChatSession,
    services::model_service::{ChatModel, ChatPrompt},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub session_id: String,
    pub reply: String,
}

/// Bounded set of tutor conversations keyed by session id.
pub struct ChatSessionStore {
    sessions: RwLock<HashMap<String, ChatSession>>,
    clock: AtomicU64,
    max_entries: usize,
    max_sessions: usize,
}

impl ChatSessionStore {
    pub fn new(max_entries: usize, max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            clock: AtomicU64::new(0),
            max_entries,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Appends the user message and returns the transcript to send to the model.
    pub async fn record_user(&self, session_id: &str, message: &str) -> String {
        let mut sessions = self.sessions.write().await;
        let tick = self.clock.fetch_add(1, Ordering::Relaxed) + 1;

        if !sessions.contains_key(session_id) {
            while sessions.len() >= self.max_sessions {
                let Some(oldest) = sessions
                    .values()
                    .min_by_key(|s| s.last_used)
                    .map(|s| s.id.clone())
                else {
                    break;
                };
                log::debug!("Evicting idle chat session {}", oldest);
                sessions.remove(&oldest);
            }
        }

        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| ChatSession::new(session_id, self.max_entries));
        session.last_used = tick;
        session.push_user(message);
        session.transcript()
    }

    pub async fn record_tutor(&self, session_id: &str, reply: &str) {
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get_mut(session_id) {
            session.push_tutor(reply);
        }
    }

    pub async fn session(&self, session_id: &str) -> Option<ChatSession> {
        self.sessions.read().await.get(session_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

pub struct ChatService {
    model: Arc<dyn ChatModel>,
    store: ChatSessionStore,
}

impl ChatService {
    pub fn new(model: Arc<dyn ChatModel>, store: ChatSessionStore) -> Self {
        Self { model, store }
    }

    pub fn store(&self) -> &ChatSessionStore {
        &self.store
    }

    /// Sends `message` within the given session, starting a new one when none is supplied.
    pub async fn chat(&self, session_id: Option<String>, message: &str) -> AppResult<ChatReply> {
        if message.trim().is_empty() {
            return Err(AppError::ValidationError(
                "message cannot be empty".to_string(),
            ));
        }

        let session_id = session_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let transcript = self.store.record_user(&session_id, message).await;
        let reply = self
            .model
            .complete(ChatPrompt::user_only(transcript))
            .await?
            .unwrap_or_default();
        self.store.record_tutor(&session_id, &reply).await;

        Ok(ChatReply { session_id, reply })
    }
}
