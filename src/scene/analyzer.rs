use crate::{
    config::SceneAnalysisConfig,
    error::Result,
    gemini::{TextClient, TextGenerationRequest},
};
use async_trait::async_trait;

/// First composer tier: asks a language model for a scene description.
#[async_trait]
pub trait SceneAnalyzer: Send + Sync {
    async fn analyze(&self, keyword: &str, industry: &str) -> Result<String>;
}

pub struct GeminiSceneAnalyzer {
    client: TextClient,
    config: SceneAnalysisConfig,
}

impl GeminiSceneAnalyzer {
    pub fn new(client: TextClient, config: SceneAnalysisConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl SceneAnalyzer for GeminiSceneAnalyzer {
    async fn analyze(&self, keyword: &str, industry: &str) -> Result<String> {
        let request = TextGenerationRequest {
            prompt: self.config.render_prompt(keyword, industry),
            model: self.config.model.clone(),
            temperature: Some(self.config.temperature),
            max_output_tokens: Some(self.config.max_output_tokens),
            response_mime_type: Some("text/plain".to_string()),
        };
        self.client.generate(request).await
    }
}

/// Strips whitespace and wrapping quotes, then caps the length at the last
/// full sentence inside `max_chars`. `None` when nothing is left.
pub fn clean_scene(raw: &str, max_chars: usize) -> Option<String> {
    let scene = raw
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
        .trim();
    if scene.is_empty() {
        return None;
    }
    if scene.chars().count() <= max_chars {
        return Some(scene.to_string());
    }

    let head: String = scene.chars().take(max_chars).collect();
    let sentence = match head.rfind('.') {
        Some(idx) => &head[..idx],
        None => head.as_str(),
    };
    let sentence = sentence.trim_end();
    if sentence.is_empty() {
        return None;
    }
    Some(format!("{}.", sentence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_scene_strips_quotes_and_whitespace() {
        assert_eq!(
            clean_scene("  \"Agronomist kneeling in a wheat field.\"\n", 200).as_deref(),
            Some("Agronomist kneeling in a wheat field.")
        );
        assert_eq!(clean_scene("'quoted'", 200).as_deref(), Some("quoted"));
    }

    #[test]
    fn test_clean_scene_rejects_empty() {
        assert!(clean_scene("   ", 200).is_none());
        assert!(clean_scene("\"\"", 200).is_none());
    }

    #[test]
    fn test_clean_scene_cuts_at_last_sentence() {
        let raw = format!("First sentence. Second sentence {}", "word ".repeat(60));
        assert_eq!(clean_scene(&raw, 200).as_deref(), Some("First sentence."));
    }

    #[test]
    fn test_clean_scene_without_period_keeps_prefix() {
        let raw = "a".repeat(300);
        let cleaned = clean_scene(&raw, 200).unwrap();
        assert_eq!(cleaned.len(), 201);
        assert!(cleaned.ends_with("a."));
    }
}
