use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_TOPIC: &str = "Educational Video";

static LEADING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*\r?\n?").expect("LEADING_FENCE is a valid regex"));
static TRAILING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```\s*$").expect("TRAILING_FENCE is a valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slide {
    pub title: String,
    pub bullets: Vec<String>,
    pub narration: String,
    pub audio: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Storyboard {
    pub topic: String,
    pub slides: Vec<Slide>,
}

/// Shape the model is asked to produce. Fields of the wrong type are coerced
/// or dropped so partial output still yields a storyboard.
#[derive(Debug, Deserialize, Default)]
struct RawStoryboard {
    #[serde(default, deserialize_with = "lenient_text")]
    topic: Option<String>,
    #[serde(default, deserialize_with = "lenient_slides")]
    slides: Vec<RawSlide>,
}

#[derive(Debug, Deserialize, Default)]
struct RawSlide {
    #[serde(default, deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_bullets")]
    bullets: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    narration: Option<String>,
}

impl From<RawSlide> for Slide {
    fn from(raw: RawSlide) -> Self {
        Slide {
            title: raw.title.unwrap_or_default(),
            bullets: raw.bullets,
            narration: raw.narration.unwrap_or_default(),
            audio: None,
        }
    }
}

/// Text form of a scalar. Null, arrays and objects have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(&Value::deserialize(deserializer)?))
}

fn lenient_bullets<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

fn lenient_slides<'de, D>(deserializer: D) -> Result<Vec<RawSlide>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        // A slide that is not an object becomes an empty slide.
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

/// Removes a markdown code fence the model may wrap around its JSON despite
/// being told not to. Text that does not start with a fence is only trimmed.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let start = LEADING_FENCE
        .find(trimmed)
        .map(|m| m.end())
        .unwrap_or(0);
    let body = &trimmed[start..];
    let end = TRAILING_FENCE
        .find(body)
        .map(|m| m.start())
        .unwrap_or(body.len());

    body[..end].trim()
}

impl Storyboard {
    /// Normalizes and parses raw completion text into a storyboard without audio.
    pub fn parse_model_output(raw: &str) -> AppResult<Self> {
        let cleaned = strip_code_fences(raw);
        if cleaned.is_empty() {
            return Err(AppError::MalformedResponse(
                "model returned an empty storyboard".to_string(),
            ));
        }

        let value: Value = serde_json::from_str(cleaned)?;
        if !value.is_object() {
            return Err(AppError::MalformedResponse(
                "storyboard is not a JSON object".to_string(),
            ));
        }
        let parsed: RawStoryboard = serde_json::from_value(value)?;

        Ok(Storyboard {
            topic: parsed.topic.unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            slides: parsed.slides.into_iter().map(Slide::from).collect(),
        })
    }
}
