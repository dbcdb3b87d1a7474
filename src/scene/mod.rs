//! Scene selection and prompt composition.
//!
//! Scenes come from the first tier that succeeds:
//! 1. a [`SceneAnalyzer`] (AI scene analysis), when one is configured
//! 2. the static keyword table in [`patterns`]
//! 3. the generic professional scene, which always succeeds

pub mod analyzer;
pub mod patterns;
pub mod prompt;

use crate::models::{ComposedPrompt, ImageRequest, SceneStrategy};
use std::sync::Arc;

pub use analyzer::{clean_scene, GeminiSceneAnalyzer, SceneAnalyzer};
pub use patterns::{generic_scene, match_keyword, GENERIC_SCENE_TEMPLATE};
pub use prompt::{build_alt_text, build_professional_prompt};

const DEFAULT_MAX_SCENE_CHARS: usize = 200;

#[derive(Clone)]
pub struct SceneComposer {
    analyzer: Option<Arc<dyn SceneAnalyzer>>,
    max_scene_chars: usize,
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComposer {
    /// Composer without AI analysis; starts at keyword matching.
    pub fn new() -> Self {
        Self {
            analyzer: None,
            max_scene_chars: DEFAULT_MAX_SCENE_CHARS,
        }
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn SceneAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    pub fn with_max_scene_chars(mut self, max_chars: usize) -> Self {
        self.max_scene_chars = max_chars;
        self
    }

    pub fn has_analyzer(&self) -> bool {
        self.analyzer.is_some()
    }

    pub async fn select_scene(&self, keyword: &str, industry: &str) -> (String, SceneStrategy) {
        if let Some(analyzer) = &self.analyzer {
            match analyzer.analyze(keyword, industry).await {
                Ok(raw) => match clean_scene(&raw, self.max_scene_chars) {
                    Some(scene) => return (scene, SceneStrategy::AiAnalysis),
                    None => log::warn!("AI scene analysis returned an empty scene, using fallback"),
                },
                Err(e) => log::warn!("AI scene generation failed, using intelligent fallback: {}", e),
            }
        }

        Self::offline_scene(keyword)
    }

    /// Tiers two and three only. Never touches the network.
    pub fn offline_scene(keyword: &str) -> (String, SceneStrategy) {
        match match_keyword(keyword) {
            Some((name, scene)) => {
                log::debug!("Keyword '{}' matched scene pattern '{}'", keyword, name);
                (scene, SceneStrategy::KeywordPattern)
            }
            None => (generic_scene(keyword), SceneStrategy::GenericFallback),
        }
    }

    pub async fn compose(&self, request: &ImageRequest) -> ComposedPrompt {
        let (scene_description, strategy) = self
            .select_scene(&request.keyword, &request.company_data.industry)
            .await;
        let prompt = build_professional_prompt(request, &scene_description);
        log::info!(
            "Generated prompt ({} chars) for '{}' via {}",
            prompt.len(),
            request.company_data.name,
            strategy
        );

        ComposedPrompt {
            prompt,
            scene_description,
            strategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ImagenError, models::CompanyData};
    use async_trait::async_trait;

    struct FixedAnalyzer(&'static str);

    #[async_trait]
    impl SceneAnalyzer for FixedAnalyzer {
        async fn analyze(&self, _keyword: &str, _industry: &str) -> crate::error::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingAnalyzer;

    #[async_trait]
    impl SceneAnalyzer for FailingAnalyzer {
        async fn analyze(&self, _keyword: &str, _industry: &str) -> crate::error::Result<String> {
            Err(ImagenError::RequestError("connection refused".to_string()))
        }
    }

    fn request(keyword: &str) -> ImageRequest {
        ImageRequest::new(
            "Headline",
            keyword,
            CompanyData::new("Acme", "Agriculture"),
        )
    }

    #[tokio::test]
    async fn test_ai_scene_wins_when_available() {
        let composer = SceneComposer::new()
            .with_analyzer(Arc::new(FixedAnalyzer("\"Vet checking cattle at dawn.\"")));
        let composed = composer.compose(&request("dairy farm")).await;

        assert_eq!(composed.strategy, SceneStrategy::AiAnalysis);
        assert_eq!(composed.scene_description, "Vet checking cattle at dawn.");
        assert!(composed.prompt.contains("Scene: Vet checking cattle at dawn."));
    }

    #[tokio::test]
    async fn test_failing_analyzer_falls_through_to_keywords() {
        let composer = SceneComposer::new().with_analyzer(Arc::new(FailingAnalyzer));
        let composed = composer.compose(&request("family farm succession")).await;

        assert_eq!(composed.strategy, SceneStrategy::KeywordPattern);
        assert_eq!(
            composed.scene_description,
            match_keyword("family farm succession").unwrap().1
        );
    }

    #[tokio::test]
    async fn test_blank_analysis_falls_through() {
        let composer = SceneComposer::new().with_analyzer(Arc::new(FixedAnalyzer("  \"\" ")));
        let (_, strategy) = composer.select_scene("orbital mechanics", "Space").await;
        assert_eq!(strategy, SceneStrategy::GenericFallback);
    }

    #[tokio::test]
    async fn test_no_analyzer_and_no_match_uses_generic_verbatim() {
        let composer = SceneComposer::new();
        let (scene, strategy) = composer.select_scene("orbital mechanics", "Space").await;

        assert_eq!(strategy, SceneStrategy::GenericFallback);
        assert_eq!(scene, GENERIC_SCENE_TEMPLATE.replace("{keyword}", "orbital mechanics"));
    }

    #[tokio::test]
    async fn test_prompt_is_never_empty() {
        let composer = SceneComposer::new().with_analyzer(Arc::new(FailingAnalyzer));
        for keyword in ["", " ", "ai", "farm", "zzz", "🚜"] {
            let composed = composer.compose(&request(keyword)).await;
            assert!(!composed.prompt.trim().is_empty());
            assert!(!composed.scene_description.trim().is_empty());
        }
    }
}
