use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Content-generation tool selected by the client.
///
/// Unknown identifiers are kept verbatim in [`ToolType::Other`] so lookups stay total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToolType {
    Quiz,
    Flashcards,
    StudyGuide,
    AudioSummary,
    VideoSummary,
    ConceptMap,
    Infographic,
    SlideDeck,
    KeyFacts,
    Other(String),
}

impl ToolType {
    pub const KNOWN: [ToolType; 9] = [
        ToolType::Quiz,
        ToolType::Flashcards,
        ToolType::StudyGuide,
        ToolType::AudioSummary,
        ToolType::VideoSummary,
        ToolType::ConceptMap,
        ToolType::Infographic,
        ToolType::SlideDeck,
        ToolType::KeyFacts,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ToolType::Quiz => "Quiz",
            ToolType::Flashcards => "Flashcards",
            ToolType::StudyGuide => "Study Guide",
            ToolType::AudioSummary => "Audio Summary",
            ToolType::VideoSummary => "Video Summary",
            ToolType::ConceptMap => "Concept Map",
            ToolType::Infographic => "Infographic",
            ToolType::SlideDeck => "Slide Deck",
            ToolType::KeyFacts => "Key Facts",
            ToolType::Other(raw) => raw,
        }
    }
}

impl FromStr for ToolType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tool = ToolType::KNOWN
            .iter()
            .find(|known| known.as_str() == s)
            .cloned()
            .unwrap_or_else(|| ToolType::Other(s.to_string()));
        Ok(tool)
    }
}

impl From<String> for ToolType {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(tool) => tool,
            Err(never) => match never {},
        }
    }
}

impl From<ToolType> for String {
    fn from(tool: ToolType) -> Self {
        tool.as_str().to_string()
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
