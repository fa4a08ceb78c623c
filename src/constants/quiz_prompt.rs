use crate::models::domain::QuestionType;

/// Builds the quiz system prompt for the requested size and question style.
pub fn build_quiz_prompt(count: u32, question_type: QuestionType) -> String {
    match question_type {
        QuestionType::ShortAnswer => format!(
            "You are an expert quiz maker. Generate exactly {count} short answer questions. \
             Use EXACTLY this format:\n\n\
             Q: [question text]\nANSWER: [concise answer]\n\n\
             Q: [next question]\nANSWER: [answer]\n\n\
             Repeat for all {count} questions."
        ),
        QuestionType::MultipleChoice => format!(
            "You are an expert quiz maker. Generate exactly {count} multiple choice questions. \
             Use EXACTLY this format:\n\n\
             Q: [question text]\nA) [option]\nB) [option]\nC) [option]\nD) [option]\nCORRECT: [A/B/C/D]\n\n\
             Q: [next question]\n...\n\n\
             Repeat for all {count} questions."
        ),
    }
}
