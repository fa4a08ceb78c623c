pub mod audio_summary_service;
pub mod chat_service;
pub mod content_generator;
pub mod model_service;
pub mod notebook_service;
pub mod prompt_context;
pub mod speech_service;
pub mod video_storyboard_service;
