#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use leeai_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Note, Notebook},
    repositories::{NoteRepository, NotebookRepository},
    services::{
        model_service::{ChatModel, ChatPrompt},
        speech_service::SpeechProvider,
    },
};

type Reply = Box<dyn Fn(&ChatPrompt) -> AppResult<Option<String>> + Send + Sync>;

/// Chat model that answers every prompt through a fixed closure and records what it saw.
pub struct FakeChatModel {
    reply: Reply,
    prompts: Mutex<Vec<ChatPrompt>>,
}

impl FakeChatModel {
    pub fn new(reply: impl Fn(&ChatPrompt) -> AppResult<Option<String>> + Send + Sync + 'static) -> Self {
        Self {
            reply: Box::new(reply),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_| Ok(Some(text.clone())))
    }

    pub fn prompts(&self) -> Vec<ChatPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for FakeChatModel {
    async fn complete(&self, prompt: ChatPrompt) -> AppResult<Option<String>> {
        let reply = (self.reply)(&prompt);
        self.prompts.lock().unwrap().push(prompt);
        reply
    }
}

/// Speech provider that "encodes" text as `mp3:<text>` bytes.
#[derive(Default)]
pub struct FakeSpeechProvider {
    calls: AtomicUsize,
    fail_with: Option<(u16, String)>,
}

impl FakeSpeechProvider {
    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_with: Some((status, body.to_string())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechProvider for FakeSpeechProvider {
    async fn speak(&self, text: String) -> AppResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some((status, body)) => Err(AppError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(format!("mp3:{}", text).into_bytes()),
        }
    }
}

#[derive(Default)]
pub struct InMemoryNotebookRepository {
    notebooks: RwLock<HashMap<String, Notebook>>,
}

#[async_trait]
impl NotebookRepository for InMemoryNotebookRepository {
    async fn create(&self, notebook: Notebook) -> AppResult<Notebook> {
        let mut notebooks = self.notebooks.write().await;
        if notebooks.contains_key(&notebook.id) {
            return Err(AppError::DatabaseError(format!(
                "Notebook with id '{}' already exists",
                notebook.id
            )));
        }
        notebooks.insert(notebook.id.clone(), notebook.clone());
        Ok(notebook)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Notebook>> {
        Ok(self.notebooks.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Notebook>> {
        let mut items: Vec<_> = self.notebooks.read().await.values().cloned().collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }
}

#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn create(&self, note: Note) -> AppResult<Note> {
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn find_by_notebook_id(&self, notebook_id: &str) -> AppResult<Vec<Note>> {
        Ok(self
            .notes
            .read()
            .await
            .iter()
            .filter(|n| n.notebook_id == notebook_id)
            .cloned()
            .collect())
    }
}

pub fn app_state(model: Arc<FakeChatModel>, speech: Arc<FakeSpeechProvider>) -> AppState {
    AppState::from_parts(
        Config::test_config(),
        model,
        speech,
        Arc::new(InMemoryNotebookRepository::default()),
        Arc::new(InMemoryNoteRepository::default()),
    )
}
