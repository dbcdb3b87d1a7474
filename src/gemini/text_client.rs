use super::GeminiTransport;
use crate::error::{ImagenError, Result};
use serde_json::json;

#[derive(Debug, Clone)]
pub struct TextGenerationRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub response_mime_type: Option<String>,
}

#[derive(Clone, Debug)]
pub struct TextClient {
    transport: GeminiTransport,
}

impl TextClient {
    pub fn new(transport: GeminiTransport) -> Self {
        Self { transport }
    }

    /// Returns the joined text parts; an empty answer is an error.
    pub async fn generate(&self, request: TextGenerationRequest) -> Result<String> {
        let payload = build_text_payload(&request);

        log::info!("Invoking text model: {}", request.model);
        let response = self
            .transport
            .generate_content(&request.model, &payload)
            .await?;

        if let Some(reason) = response.block_reason() {
            return Err(ImagenError::ResponseError(format!(
                "Prompt blocked by model ({})",
                reason
            )));
        }

        let text = response.text();
        if text.trim().is_empty() {
            return Err(ImagenError::ResponseError(format!(
                "Empty text response from {}",
                request.model
            )));
        }
        Ok(text)
    }
}

fn build_text_payload(request: &TextGenerationRequest) -> serde_json::Value {
    let mut generation_config = serde_json::Map::new();
    if let Some(temperature) = request.temperature {
        generation_config.insert("temperature".to_string(), json!(temperature));
    }
    if let Some(max_tokens) = request.max_output_tokens {
        generation_config.insert("maxOutputTokens".to_string(), json!(max_tokens));
    }
    if let Some(mime) = request.response_mime_type.as_deref() {
        generation_config.insert("responseMimeType".to_string(), json!(mime));
    }

    json!({
        "contents": [{ "role": "user", "parts": [{ "text": request.prompt }] }],
        "generationConfig": generation_config,
    })
}
