use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::scene::{ComposedPrompt, SceneStrategy};

/// Raw image returned by a generation backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Outcome of one generation call. Callers must check `success`.
#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    pub success: bool,
    #[serde(skip)]
    pub image_data: Option<Vec<u8>>,
    pub image_url: String,
    pub mime_type: Option<String>,
    pub alt_text: String,
    pub generation_time_seconds: f64,
    pub scene_description: Option<String>,
    pub scene_strategy: Option<SceneStrategy>,
    pub prompt_used: Option<String>,
    pub error: Option<String>,
    pub request_id: String,
    pub generated_at: DateTime<Utc>,
}

impl ImageResponse {
    pub fn success(
        request_id: impl Into<String>,
        image: GeneratedImage,
        alt_text: impl Into<String>,
        generation_time_seconds: f64,
        composed: ComposedPrompt,
    ) -> Self {
        let image_url = format!(
            "data:{};base64,{}",
            image.mime_type,
            general_purpose::STANDARD.encode(&image.bytes)
        );

        Self {
            success: true,
            image_data: Some(image.bytes),
            image_url,
            mime_type: Some(image.mime_type),
            alt_text: alt_text.into(),
            generation_time_seconds,
            scene_description: Some(composed.scene_description),
            scene_strategy: Some(composed.strategy),
            prompt_used: Some(composed.prompt),
            error: None,
            request_id: request_id.into(),
            generated_at: Utc::now(),
        }
    }

    /// `composed` is carried along when the prompt was built before the failure.
    pub fn failure(
        request_id: impl Into<String>,
        error: impl Into<String>,
        generation_time_seconds: f64,
        composed: Option<ComposedPrompt>,
    ) -> Self {
        let mut error = error.into();
        if error.trim().is_empty() {
            error = "Image generation failed".to_string();
        }
        let (scene_description, scene_strategy, prompt_used) = match composed {
            Some(c) => (Some(c.scene_description), Some(c.strategy), Some(c.prompt)),
            None => (None, None, None),
        };

        Self {
            success: false,
            image_data: None,
            image_url: String::new(),
            mime_type: None,
            alt_text: String::new(),
            generation_time_seconds,
            scene_description,
            scene_strategy,
            prompt_used,
            error: Some(error),
            request_id: request_id.into(),
            generated_at: Utc::now(),
        }
    }

    pub fn image_bytes(&self) -> Option<&[u8]> {
        self.image_data.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composed() -> ComposedPrompt {
        ComposedPrompt {
            prompt: "prompt".to_string(),
            scene_description: "scene".to_string(),
            strategy: SceneStrategy::KeywordPattern,
        }
    }

    #[test]
    fn test_success_builds_data_url() {
        let image = GeneratedImage {
            bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
            mime_type: "image/jpeg".to_string(),
        };
        let response = ImageResponse::success("req-1", image, "alt", 1.5, composed());

        assert!(response.success);
        assert_eq!(response.image_url, "data:image/jpeg;base64,/9j/4A==");
        assert_eq!(response.image_bytes(), Some(&[0xFF, 0xD8, 0xFF, 0xE0][..]));
        assert!(response.error.is_none());
        assert_eq!(response.scene_strategy, Some(SceneStrategy::KeywordPattern));
    }

    #[test]
    fn test_failure_never_has_blank_error() {
        let response = ImageResponse::failure("req-2", "   ", 0.1, None);
        assert!(!response.success);
        assert!(response.image_data.is_none());
        assert_eq!(response.error.as_deref(), Some("Image generation failed"));
        assert!(response.prompt_used.is_none());
    }

    #[test]
    fn test_serialized_response_skips_image_bytes() {
        let image = GeneratedImage {
            bytes: vec![1, 2, 3],
            mime_type: "image/png".to_string(),
        };
        let response = ImageResponse::success("req-3", image, "alt", 0.2, composed());
        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("image_data").is_none());
        assert_eq!(value["scene_strategy"], "keyword_pattern");
        assert_eq!(value["request_id"], "req-3");
    }
}
