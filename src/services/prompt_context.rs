use std::borrow::Cow;

use crate::models::domain::ToolType;

/// Context ceiling for text generation and the audio narration.
pub const TEXT_CONTEXT_LIMIT: usize = 8000;
/// Tighter ceiling for storyboards, whose output is multiplied across slides.
pub const STORYBOARD_CONTEXT_LIMIT: usize = 6000;
/// Provider input limit for speech synthesis.
pub const SPEECH_CHAR_LIMIT: usize = 4000;

pub const TRUNCATION_MARKER: &str = "\n\n[...content truncated for length...]";
pub const STORYBOARD_TRUNCATION_MARKER: &str = "\n\n[...content truncated...]";

/// First `limit` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Caps `context` at `limit` characters and appends `marker` when anything was cut.
pub fn cap_context<'a>(context: Option<&'a str>, limit: usize, marker: &str) -> Option<Cow<'a, str>> {
    let context = context?;
    let head = truncate_chars(context, limit);
    if head.len() == context.len() {
        Some(Cow::Borrowed(context))
    } else {
        Some(Cow::Owned(format!("{}{}", head, marker)))
    }
}

/// Returns the context only if it has something other than whitespace.
pub fn non_blank(context: Option<&str>) -> Option<&str> {
    context.filter(|c| !c.trim().is_empty())
}

pub fn generation_user_message(tool_type: &ToolType, context: Option<&str>) -> String {
    match non_blank(context) {
        Some(context) => format!(
            "Here is the text extracted from the user's document. Generate a {} about the subject matter and topics discussed in this text:\n\n{}",
            tool_type, context
        ),
        None => format!(
            "There is no specific content provided. Generate a helpful example {} on a general educational topic.",
            tool_type
        ),
    }
}

pub fn narration_user_message(context: Option<&str>) -> String {
    match non_blank(context) {
        Some(context) => format!("Summarize this content as a spoken narration:\n\n{}", context),
        None => "Create a short spoken educational summary on an interesting general learning topic."
            .to_string(),
    }
}

pub fn storyboard_user_message(context: Option<&str>) -> String {
    match non_blank(context) {
        Some(context) => format!(
            "Create an educational video presentation about this content:\n\n{}",
            context
        ),
        None => "Create an educational video presentation on an interesting general learning topic."
            .to_string(),
    }
}
