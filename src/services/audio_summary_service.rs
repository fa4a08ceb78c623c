use std::sync::Arc;

use crate::{
    constants::prompts::NARRATOR_PROMPT,
    errors::{AppError, AppResult},
    services::{
        content_generator::ContentGenerator,
        model_service::ChatPrompt,
        prompt_context::{
            cap_context, narration_user_message, truncate_chars, SPEECH_CHAR_LIMIT,
            TEXT_CONTEXT_LIMIT, TRUNCATION_MARKER,
        },
        speech_service::SpeechSynthesizer,
    },
};

/// Narrated summary: script from the chat model, then speech synthesis.
pub struct AudioSummaryService {
    generator: Arc<ContentGenerator>,
    synthesizer: Arc<SpeechSynthesizer>,
}

impl AudioSummaryService {
    pub fn new(generator: Arc<ContentGenerator>, synthesizer: Arc<SpeechSynthesizer>) -> Self {
        Self {
            generator,
            synthesizer,
        }
    }

    pub async fn build_audio_summary(&self, context: Option<&str>) -> AppResult<Vec<u8>> {
        let context = cap_context(context, TEXT_CONTEXT_LIMIT, TRUNCATION_MARKER);
        let prompt = ChatPrompt::new(NARRATOR_PROMPT, narration_user_message(context.as_deref()));

        let script = self
            .generator
            .complete(prompt)
            .await?
            .filter(|script| !script.trim().is_empty())
            .ok_or(AppError::EmptyGeneration)?;

        let script = truncate_chars(&script, SPEECH_CHAR_LIMIT);
        log::info!("Narrating audio summary script of {} chars", script.chars().count());

        self.synthesizer.synthesize(script).await
    }
}
