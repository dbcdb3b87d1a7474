use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImagenError {
    #[error("Google API key required. Set GOOGLE_API_KEY environment variable or pass api_key parameter.")]
    CredentialMissing,
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<reqwest::Error> for ImagenError {
    fn from(err: reqwest::Error) -> Self {
        ImagenError::RequestError(err.to_string())
    }
}

impl From<serde_json::Error> for ImagenError {
    fn from(err: serde_json::Error) -> Self {
        ImagenError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ImagenError>;
