use std::sync::Arc;

use crate::{
    constants::{prompts, quiz_prompt::build_quiz_prompt},
    errors::AppResult,
    models::{domain::ToolType, dto::request::GenerateRequest},
    services::{
        model_service::{ChatModel, ChatPrompt},
        prompt_context::{cap_context, generation_user_message, TEXT_CONTEXT_LIMIT, TRUNCATION_MARKER},
    },
};

pub struct ContentGenerator {
    model: Arc<dyn ChatModel>,
}

impl ContentGenerator {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Builds the system and user messages for a generation request.
    pub fn build_prompt(request: &GenerateRequest) -> ChatPrompt {
        let context = cap_context(request.context.as_deref(), TEXT_CONTEXT_LIMIT, TRUNCATION_MARKER);

        let system = match &request.tool_type {
            ToolType::Quiz => build_quiz_prompt(request.quiz_count(), request.question_type()),
            other => prompts::lookup(other).into_owned(),
        };

        ChatPrompt::new(
            system,
            generation_user_message(&request.tool_type, context.as_deref()),
        )
    }

    /// Raw model output for the requested tool. No post-processing is applied.
    pub async fn generate(&self, request: &GenerateRequest) -> AppResult<String> {
        log::info!(
            "Generating {} from {} chars of context",
            request.tool_type,
            request.context.as_deref().map(|c| c.chars().count()).unwrap_or(0)
        );

        let prompt = Self::build_prompt(request);
        let content = self.complete(prompt).await?;
        Ok(content.unwrap_or_default())
    }

    /// Single completion call shared with the audio and video pipelines.
    pub async fn complete(&self, prompt: ChatPrompt) -> AppResult<Option<String>> {
        self.model.complete(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::AppError, services::model_service::MockChatModel};

    fn request(tool: &str, context: Option<&str>) -> GenerateRequest {
        GenerateRequest {
            tool_type: ToolType::from(tool.to_string()),
            context: context.map(str::to_string),
            count: None,
            question_type: None,
        }
    }

    #[test]
    fn test_long_context_is_truncated_with_marker() {
        let long = "x".repeat(TEXT_CONTEXT_LIMIT + 500);
        let prompt = ContentGenerator::build_prompt(&request("Study Guide", Some(&long)));

        let expected_tail = format!("{}{}", "x".repeat(TEXT_CONTEXT_LIMIT), TRUNCATION_MARKER);
        assert!(prompt.user.ends_with(&format!("\n\n{}", expected_tail)));
    }

    #[test]
    fn test_context_at_limit_is_passed_unchanged() {
        let exact = "y".repeat(TEXT_CONTEXT_LIMIT);
        let prompt = ContentGenerator::build_prompt(&request("Study Guide", Some(&exact)));

        assert!(prompt.user.ends_with(&format!("\n\n{}", exact)));
        assert!(!prompt.user.contains("truncated"));
    }

    #[test]
    fn test_short_answer_quiz_prompt() {
        let mut req = request("Quiz", Some("Plate tectonics"));
        req.count = Some(5);
        req.question_type = Some("short-answer".to_string());

        let prompt = ContentGenerator::build_prompt(&req);
        let system = prompt.system.unwrap_or_default();
        assert!(system.contains("Generate exactly 5 short answer questions."));
        assert!(system.contains("ANSWER:"));
    }

    #[test]
    fn test_quiz_defaults_to_ten_multiple_choice_questions() {
        let prompt = ContentGenerator::build_prompt(&request("Quiz", None));
        let system = prompt.system.unwrap_or_default();

        assert!(system.contains("Generate exactly 10 multiple choice questions."));
        assert!(system.contains("CORRECT: [A/B/C/D]"));
    }

    #[test]
    fn test_unknown_tool_uses_generic_template() {
        let prompt = ContentGenerator::build_prompt(&request("Timeline", Some("WW2")));

        assert_eq!(
            prompt.system.as_deref(),
            Some("You are an expert educator. Process the following content and generate a helpful Timeline.")
        );
        assert!(prompt.user.contains("Generate a Timeline about"));
    }

    #[actix_web::test]
    async fn test_generate_returns_completion_verbatim() {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .times(1)
            .withf(|prompt| {
                prompt.system.as_deref() == Some(prompts::FLASHCARDS_PROMPT)
                    && prompt.user.starts_with("There is no specific content provided.")
            })
            .returning(|_| Ok(Some("  CARD: 1\nQ: x\nA: y  ".to_string())));
        let generator = ContentGenerator::new(Arc::new(model));

        let output = generator.generate(&request("Flashcards", None)).await.unwrap();
        assert_eq!(output, "  CARD: 1\nQ: x\nA: y  ");
    }

    #[actix_web::test]
    async fn test_generate_propagates_provider_failure() {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .times(1)
            .returning(|_| Err(AppError::InternalError("connection refused".to_string())));
        let generator = ContentGenerator::new(Arc::new(model));

        let result = generator.generate(&request("Key Facts", Some("Cells"))).await;
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
