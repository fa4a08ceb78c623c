use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoNoteRepository, MongoNotebookRepository, NoteRepository, NotebookRepository,
    },
    services::{
        audio_summary_service::AudioSummaryService,
        chat_service::{ChatService, ChatSessionStore},
        content_generator::ContentGenerator,
        model_service::{ChatModel, OpenAiChatModel},
        notebook_service::NotebookService,
        speech_service::{OpenAiSpeechClient, SpeechProvider, SpeechSynthesizer},
        video_storyboard_service::VideoStoryboardService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub content_generator: Arc<ContentGenerator>,
    pub audio_summary_service: Arc<AudioSummaryService>,
    pub video_storyboard_service: Arc<VideoStoryboardService>,
    pub chat_service: Arc<ChatService>,
    pub notebook_service: Arc<NotebookService>,
    pub db: Option<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let notebook_repository = Arc::new(MongoNotebookRepository::new(&db));
        notebook_repository.ensure_indexes().await?;
        let note_repository = Arc::new(MongoNoteRepository::new(&db));
        note_repository.ensure_indexes().await?;

        let chat_model = Arc::new(OpenAiChatModel::new(&config));
        let speech_provider = Arc::new(OpenAiSpeechClient::new(&config)?);

        let mut state = Self::from_parts(
            config,
            chat_model,
            speech_provider,
            notebook_repository,
            note_repository,
        );
        state.db = Some(db);
        Ok(state)
    }

    /// Wires services over the given providers and repositories without a database handle.
    pub fn from_parts(
        config: Config,
        chat_model: Arc<dyn ChatModel>,
        speech_provider: Arc<dyn SpeechProvider>,
        notebooks: Arc<dyn NotebookRepository>,
        notes: Arc<dyn NoteRepository>,
    ) -> Self {
        let content_generator = Arc::new(ContentGenerator::new(chat_model.clone()));
        let synthesizer = Arc::new(SpeechSynthesizer::new(speech_provider));

        let audio_summary_service = Arc::new(AudioSummaryService::new(
            content_generator.clone(),
            synthesizer.clone(),
        ));
        let video_storyboard_service = Arc::new(VideoStoryboardService::new(
            content_generator.clone(),
            synthesizer,
        ));
        let chat_service = Arc::new(ChatService::new(
            chat_model,
            ChatSessionStore::new(config.chat_history_limit, config.chat_session_limit),
        ));
        let notebook_service = Arc::new(NotebookService::new(notebooks, notes));

        Self {
            content_generator,
            audio_summary_service,
            video_storyboard_service,
            chat_service,
            notebook_service,
            db: None,
            config: Arc::new(config),
        }
    }
}
