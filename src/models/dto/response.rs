use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use crate::models::domain::{Slide, Storyboard};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlideResponse {
    pub title: String,
    pub bullets: Vec<String>,
    pub narration: String,
    pub audio_base64: String,
}

impl From<Slide> for SlideResponse {
    fn from(slide: Slide) -> Self {
        SlideResponse {
            title: slide.title,
            bullets: slide.bullets,
            narration: slide.narration,
            audio_base64: slide
                .audio
                .map(|bytes| STANDARD.encode(bytes))
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StoryboardResponse {
    pub topic: String,
    pub slides: Vec<SlideResponse>,
}

impl From<Storyboard> for StoryboardResponse {
    fn from(storyboard: Storyboard) -> Self {
        StoryboardResponse {
            topic: storyboard.topic,
            slides: storyboard.slides.into_iter().map(SlideResponse::from).collect(),
        }
    }
}
