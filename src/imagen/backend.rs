use crate::{error::Result, models::GeneratedImage};
use async_trait::async_trait;

/// Remote text-to-image endpoint used by [`super::OpenImagen`].
#[async_trait]
pub trait ImageBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage>;

    /// Model or backend name, for logs.
    fn name(&self) -> &str;
}
