use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{QuestionType, ToolType};

pub const DEFAULT_QUIZ_COUNT: u32 = 10;
pub const MAX_QUIZ_COUNT: u32 = 50;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_quiz_count"))]
pub struct GenerateRequest {
    pub tool_type: ToolType,

    #[serde(default)]
    pub context: Option<String>,

    /// Only read for quizzes; other tools ignore it.
    #[serde(default)]
    pub count: Option<u32>,

    #[serde(default)]
    pub question_type: Option<String>,
}

impl GenerateRequest {
    pub fn quiz_count(&self) -> u32 {
        self.count.unwrap_or(DEFAULT_QUIZ_COUNT)
    }

    pub fn question_type(&self) -> QuestionType {
        QuestionType::from_request(self.question_type.as_deref())
    }
}

fn validate_quiz_count(request: &GenerateRequest) -> Result<(), ValidationError> {
    match (&request.tool_type, request.count) {
        (ToolType::Quiz, Some(count)) if !(1..=MAX_QUIZ_COUNT).contains(&count) => {
            let mut err = ValidationError::new("quiz_count");
            err.message = Some(format!("quiz count must be between 1 and {}", MAX_QUIZ_COUNT).into());
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Body of the audio and video endpoints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContextRequest {
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatQuery {
    #[validate(length(min = 1, max = 4000))]
    pub message: String,

    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateNotebookRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateNoteRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default)]
    pub content: Option<String>,
}
