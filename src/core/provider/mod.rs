//! Generative-AI provider seam: the two operations the app needs (list models,
//! generate content), with a Gemini REST implementation.

mod error;
#[cfg(test)]
pub(crate) mod fake;
mod gemini;

use async_trait::async_trait;

use crate::core::models::ModelInfo;

pub use error::ProviderError;
pub use gemini::GeminiClient;

/// A text-generation backend.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Full model catalog with each model's supported generation methods.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError>;

    /// Generate text for `prompt` with the named model.
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, ProviderError>;
}
