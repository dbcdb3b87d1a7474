use super::GeminiTransport;
use crate::{
    error::{ImagenError, Result},
    imagen::ImageBackend,
    models::{GenerateContentResponse, GeneratedImage, Part},
};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde_json::json;

const MIN_IMAGE_BYTES: usize = 100;
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

#[derive(Clone, Debug)]
pub struct ImageClient {
    transport: GeminiTransport,
    model: String,
    aspect_ratio: String,
}

impl ImageClient {
    pub fn new(transport: GeminiTransport, model: String, aspect_ratio: String) -> Self {
        Self {
            transport,
            model,
            aspect_ratio,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One `generateContent` call; no retries.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        let payload = build_image_payload(prompt, &self.aspect_ratio);

        log::info!("Generating image with model: {}", self.model);
        let response = self.transport.generate_content(&self.model, &payload).await?;
        let image = extract_image(&response)?;
        log::info!(
            "Received {} image ({} bytes)",
            image.mime_type,
            image.bytes.len()
        );
        Ok(image)
    }
}

#[async_trait]
impl ImageBackend for ImageClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        ImageClient::generate(self, prompt).await
    }

    fn name(&self) -> &str {
        &self.model
    }
}

fn build_image_payload(prompt: &str, aspect_ratio: &str) -> serde_json::Value {
    let mut generation_config = json!({ "responseModalities": ["TEXT", "IMAGE"] });
    let aspect_ratio = aspect_ratio.trim();
    if !aspect_ratio.is_empty() {
        generation_config["imageConfig"] = json!({ "aspectRatio": aspect_ratio });
    }

    json!({
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        "generationConfig": generation_config,
    })
}

pub(crate) fn detect_image_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(JPEG_MAGIC) {
        Some("image/jpeg")
    } else if bytes.starts_with(PNG_MAGIC) {
        Some("image/png")
    } else {
        None
    }
}

/// First inline part that decodes to a plausible JPEG or PNG.
pub(crate) fn extract_image(response: &GenerateContentResponse) -> Result<GeneratedImage> {
    if let Some(reason) = response.block_reason() {
        return Err(ImagenError::ResponseError(format!(
            "Prompt blocked by model ({})",
            reason
        )));
    }

    for part in response.parts() {
        let Part::InlineData { inline_data } = part else {
            continue;
        };
        let bytes = match general_purpose::STANDARD.decode(inline_data.data.trim()) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("Skipping undecodable inline data: {}", e);
                continue;
            }
        };
        if bytes.len() <= MIN_IMAGE_BYTES {
            continue;
        }
        if let Some(mime_type) = detect_image_mime(&bytes) {
            return Ok(GeneratedImage {
                bytes,
                mime_type: mime_type.to_string(),
            });
        }
    }

    let text = response.text();
    let detail = if text.is_empty() {
        String::new()
    } else {
        format!(" (model said: {})", super::truncate_for_log(&text, 200))
    };
    Err(ImagenError::ResponseError(format!(
        "No image in response{}",
        detail
    )))
}
