use std::sync::Arc;

use futures::{stream, StreamExt, TryStreamExt};

use crate::{
    constants::prompts::STORYBOARD_PROMPT,
    errors::{AppError, AppResult},
    models::domain::{Slide, Storyboard},
    services::{
        content_generator::ContentGenerator,
        model_service::ChatPrompt,
        prompt_context::{
            cap_context, storyboard_user_message, STORYBOARD_CONTEXT_LIMIT,
            STORYBOARD_TRUNCATION_MARKER,
        },
        speech_service::SpeechSynthesizer,
    },
};

/// Upper bound on concurrent narration requests for one storyboard.
pub const SLIDE_SYNTHESIS_CONCURRENCY: usize = 5;

pub struct VideoStoryboardService {
    generator: Arc<ContentGenerator>,
    synthesizer: Arc<SpeechSynthesizer>,
}

impl VideoStoryboardService {
    pub fn new(generator: Arc<ContentGenerator>, synthesizer: Arc<SpeechSynthesizer>) -> Self {
        Self {
            generator,
            synthesizer,
        }
    }

    /// Generates a narrated storyboard. A failed narration fails the whole request.
    pub async fn build_video_storyboard(&self, context: Option<&str>) -> AppResult<Storyboard> {
        let context = cap_context(context, STORYBOARD_CONTEXT_LIMIT, STORYBOARD_TRUNCATION_MARKER);
        let prompt = ChatPrompt::new(STORYBOARD_PROMPT, storyboard_user_message(context.as_deref()));

        let raw = self
            .generator
            .complete(prompt)
            .await?
            .ok_or_else(|| AppError::MalformedResponse("model returned no storyboard".to_string()))?;

        let storyboard = Storyboard::parse_model_output(&raw)?;
        log::info!(
            "Parsed storyboard '{}' with {} slides",
            storyboard.topic,
            storyboard.slides.len()
        );

        let slides = self.narrate(storyboard.slides).await?;

        Ok(Storyboard {
            topic: storyboard.topic,
            slides,
        })
    }

    async fn narrate(&self, slides: Vec<Slide>) -> AppResult<Vec<Slide>> {
        let synthesizer = &self.synthesizer;

        // `buffered` yields results in input order regardless of completion order.
        stream::iter(slides)
            .map(|mut slide| async move {
                let audio = synthesizer.synthesize(&slide.narration).await?;
                slide.audio = Some(audio);
                Ok::<_, AppError>(slide)
            })
            .buffered(SLIDE_SYNTHESIS_CONCURRENCY)
            .try_collect()
            .await
    }
}
