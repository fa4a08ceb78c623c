pub mod chat_session;
pub mod notebook;
pub mod question_type;
pub mod storyboard;
pub mod tool_type;

pub use chat_session::ChatSession;
pub use notebook::{Note, Notebook};
pub use question_type::QuestionType;
pub use storyboard::{Slide, Storyboard};
pub use tool_type::ToolType;
