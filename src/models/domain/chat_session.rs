use std::collections::VecDeque;

pub const USER_PREFIX: &str = "User: ";
pub const TUTOR_PREFIX: &str = "AI Tutor: ";

/// Bounded tutor conversation owned by one client session.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: String,
    entries: VecDeque<String>,
    max_entries: usize,
    /// Store-assigned tick of the most recent access.
    pub last_used: u64,
}

impl ChatSession {
    pub fn new(id: impl Into<String>, max_entries: usize) -> Self {
        Self {
            id: id.into(),
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
            last_used: 0,
        }
    }

    pub fn push_user(&mut self, message: &str) {
        self.push(format!("{}{}", USER_PREFIX, message));
    }

    pub fn push_tutor(&mut self, reply: &str) {
        self.push(format!("{}{}", TUTOR_PREFIX, reply));
    }

    fn push(&mut self, entry: String) {
        while self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Prompt sent to the model: the log so far followed by the tutor cue.
    pub fn transcript(&self) -> String {
        let mut prompt = self
            .entries
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        prompt.push('\n');
        prompt.push_str(TUTOR_PREFIX);
        prompt
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
