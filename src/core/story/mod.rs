//! Story generation: build the prompt from three words and send it to the chosen model.

mod prompt;

use std::sync::Arc;

use serde::Deserialize;

use crate::core::config::Config;
use crate::core::provider::{Provider, ProviderError};

pub use prompt::build_prompt;

/// One form submission: three free-text words and the selected model id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StoryRequest {
    pub word1: String,
    pub word2: String,
    pub word3: String,
    pub selected_model: String,
}

/// Why a story could not be produced. The `Display` text is shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("ERRO: Chave de API não configurada (defina GEMINI_API_KEY no arquivo .env)")]
    NotConfigured,
    #[error("Erro ao gerar com o modelo {model}: {source}")]
    Generation {
        model: String,
        source: ProviderError,
    },
}

#[derive(Clone)]
pub struct StoryGenerator {
    config: Arc<Config>,
    provider: Arc<dyn Provider>,
}

impl StoryGenerator {
    pub fn new(config: Arc<Config>, provider: Arc<dyn Provider>) -> Self {
        Self { config, provider }
    }

    /// Generate a story with exactly the requested model (no fallback).
    /// The provider's text is returned unmodified.
    pub async fn generate_story(&self, request: &StoryRequest) -> Result<String, StoryError> {
        if !self.config.has_api_key() {
            return Err(StoryError::NotConfigured);
        }

        let prompt = build_prompt(&request.word1, &request.word2, &request.word3);
        let model = request.selected_model.as_str();
        log::info!("Generating story with model {}", model);

        self.provider
            .generate_content(model, &prompt)
            .await
            .map_err(|source| {
                if source.is_transient() {
                    log::warn!("Model {} temporarily unavailable: {}", model, source);
                } else {
                    log::error!("Model {} failed: {}", model, source);
                }
                StoryError::Generation {
                    model: model.to_string(),
                    source,
                }
            })
    }
}
