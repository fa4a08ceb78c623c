/// Question style for generated quizzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    ShortAnswer,
}

impl QuestionType {
    /// Anything other than `short-answer`, including no value, is multiple choice.
    pub fn from_request(raw: Option<&str>) -> Self {
        match raw {
            Some("short-answer") => QuestionType::ShortAnswer,
            _ => QuestionType::MultipleChoice,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::ShortAnswer => "short-answer",
        }
    }
}
