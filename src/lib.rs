//! OpenImagen: editorial-quality business images from a topic description.
//!
//! ```no_run
//! # async fn run() {
//! let response = openimagen::generate_professional_image(
//!     "Quantum Computing Revolution",
//!     "quantum computing algorithms",
//!     "QuantumTech",
//!     "Advanced Computing",
//!     None,
//!     None,
//! )
//! .await;
//!
//! if response.success {
//!     std::fs::write("quantum_image.jpg", response.image_bytes().unwrap_or_default()).ok();
//! }
//! # }
//! ```

pub mod config;
pub mod error;
pub mod gemini;
pub mod imagen;
pub mod logger;
pub mod models;
pub mod scene;

pub use config::{ImagenConfig, SceneAnalysisConfig};
pub use error::{ImagenError, Result};
pub use gemini::{GeminiClient, ImageClient, TextClient};
pub use imagen::{generate_professional_image, ImageBackend, OpenImagen};
pub use models::{
    CompanyData, ComposedPrompt, GeneratedImage, ImageRequest, ImageResponse, SceneStrategy,
};
pub use scene::{SceneAnalyzer, SceneComposer};
