use serde::{Deserialize, Serialize};
use std::fmt;

/// Which tier produced the scene description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneStrategy {
    AiAnalysis,
    KeywordPattern,
    GenericFallback,
}

impl SceneStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneStrategy::AiAnalysis => "ai_analysis",
            SceneStrategy::KeywordPattern => "keyword_pattern",
            SceneStrategy::GenericFallback => "generic_fallback",
        }
    }
}

impl fmt::Display for SceneStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedPrompt {
    pub prompt: String,
    pub scene_description: String,
    pub strategy: SceneStrategy,
}
