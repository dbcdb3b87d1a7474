//! Professional image generation entry points.
//!
//! [`OpenImagen`] composes a prompt with the [`SceneComposer`], sends it to an
//! [`ImageBackend`] exactly once and folds every outcome into an
//! [`ImageResponse`]. Errors never escape `generate_image`.

pub mod backend;

use crate::{
    config::ImagenConfig,
    error::{ImagenError, Result},
    gemini::GeminiClient,
    logger,
    models::{CompanyData, ComposedPrompt, ImageRequest, ImageResponse},
    scene::{build_alt_text, GeminiSceneAnalyzer, SceneComposer},
};
use std::sync::Arc;
use uuid::Uuid;

pub use backend::ImageBackend;

#[derive(Clone)]
pub struct OpenImagen {
    composer: SceneComposer,
    backend: Arc<dyn ImageBackend>,
}

impl OpenImagen {
    /// Builds a Gemini-backed generator. `api_key` wins over the environment.
    pub fn new(api_key: Option<&str>) -> Result<Self> {
        Self::with_config(ImagenConfig::from_env().with_api_key(api_key))
    }

    pub fn with_config(config: ImagenConfig) -> Result<Self> {
        let client = GeminiClient::new(&config)?;

        let mut composer =
            SceneComposer::new().with_max_scene_chars(config.scene_analysis.max_scene_chars);
        if config.scene_analysis_enabled {
            composer = composer.with_analyzer(Arc::new(GeminiSceneAnalyzer::new(
                client.text().clone(),
                config.scene_analysis.clone(),
            )));
        }

        log::info!("OpenImagen initialized (model: {})", config.image_model);
        Ok(Self::from_parts(composer, Arc::new(client.image().clone())))
    }

    pub fn from_parts(composer: SceneComposer, backend: Arc<dyn ImageBackend>) -> Self {
        Self { composer, backend }
    }

    /// Prompt preview; runs scene selection but never calls the image model.
    pub async fn compose(&self, request: &ImageRequest) -> ComposedPrompt {
        self.composer.compose(request).await
    }

    pub async fn generate_image(&self, request: &ImageRequest) -> ImageResponse {
        let request_id = Uuid::new_v4().to_string();
        let timer = logger::timer("image generation");
        log::info!(
            "Starting image generation for: {} [req:{}]",
            request.headline,
            request_id
        );

        let composed = self.compose(request).await;

        match self.backend.generate(&composed.prompt).await {
            Ok(image) if !image.bytes.is_empty() => {
                let elapsed = timer.elapsed().as_secs_f64();
                log::info!(
                    "Successfully generated image with {} ({} bytes) [req:{}]",
                    self.backend.name(),
                    image.bytes.len(),
                    request_id
                );
                ImageResponse::success(
                    request_id,
                    image,
                    build_alt_text(&request.headline),
                    elapsed,
                    composed,
                )
            }
            Ok(_) => {
                let err = ImagenError::ResponseError("Backend returned an empty image".into());
                Self::failed(request_id, err, timer.elapsed().as_secs_f64(), composed)
            }
            Err(err) => Self::failed(request_id, err, timer.elapsed().as_secs_f64(), composed),
        }
    }

    fn failed(
        request_id: String,
        err: ImagenError,
        elapsed: f64,
        composed: ComposedPrompt,
    ) -> ImageResponse {
        log::error!("Image generation failed: {} [req:{}]", err, request_id);
        ImageResponse::failure(request_id, err.to_string(), elapsed, Some(composed))
    }
}

/// One-shot convenience wrapper around [`OpenImagen`]. A missing credential
/// comes back as a failed response rather than an error.
pub async fn generate_professional_image(
    headline: &str,
    keyword: &str,
    company_name: &str,
    industry: &str,
    api_key: Option<&str>,
    custom_instructions: Option<&str>,
) -> ImageResponse {
    let generator = match OpenImagen::new(api_key) {
        Ok(generator) => generator,
        Err(err) => {
            log::error!("Image generation failed: {}", err);
            return ImageResponse::failure(Uuid::new_v4().to_string(), err.to_string(), 0.0, None);
        }
    };

    let mut company_data = CompanyData::new(company_name, industry);
    if let Some(instructions) = custom_instructions {
        company_data = company_data.with_custom_instructions(instructions);
    }
    let request = ImageRequest::new(headline, keyword, company_data);

    generator.generate_image(&request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeneratedImage, SceneStrategy};
    use async_trait::async_trait;

    struct EmptyBackend;

    #[async_trait]
    impl ImageBackend for EmptyBackend {
        async fn generate(&self, _prompt: &str) -> Result<GeneratedImage> {
            Ok(GeneratedImage {
                bytes: Vec::new(),
                mime_type: "image/jpeg".to_string(),
            })
        }

        fn name(&self) -> &str {
            "empty"
        }
    }

    fn request() -> ImageRequest {
        ImageRequest::new(
            "Harvest Season",
            "harvest logistics",
            CompanyData::new("GrainCo", "Agriculture"),
        )
    }

    #[test]
    fn test_config_without_key_is_rejected() {
        let err = OpenImagen::with_config(ImagenConfig::new()).err().unwrap();
        assert!(matches!(err, ImagenError::CredentialMissing));
    }

    #[tokio::test]
    async fn test_empty_image_is_a_failure() {
        let imagen = OpenImagen::from_parts(SceneComposer::new(), Arc::new(EmptyBackend));
        let response = imagen.generate_image(&request()).await;

        assert!(!response.success);
        assert!(response.image_data.is_none());
        assert!(response.error.unwrap().contains("empty image"));
        assert_eq!(response.scene_strategy, Some(SceneStrategy::KeywordPattern));
    }

    #[tokio::test]
    async fn test_compose_does_not_call_backend() {
        let imagen = OpenImagen::from_parts(SceneComposer::new(), Arc::new(EmptyBackend));
        let composed = imagen.compose(&request()).await;
        assert!(composed.prompt.contains("harvest logistics"));
    }

    #[tokio::test]
    async fn test_with_config_disables_analysis() {
        let config = ImagenConfig::new()
            .with_api_key(Some("test-key"))
            .with_scene_analysis(false);
        let imagen = OpenImagen::with_config(config).unwrap();
        assert!(!imagen.composer.has_analyzer());
    }
}
