//! List the provider's text-generation models for the selector.

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::provider::Provider;

use super::info::{GENERATE_CONTENT, ModelInfo};

/// Keep models that support `generateContent`; return their ids sorted ascending.
pub fn generation_models(models: Vec<ModelInfo>) -> Vec<String> {
    let mut names: Vec<String> = models
        .into_iter()
        .filter(|m| m.supports(GENERATE_CONTENT))
        .map(|m| m.name)
        .collect();
    names.sort();
    names
}

/// Queries the provider catalog on every call (no caching).
#[derive(Clone)]
pub struct ModelLister {
    config: Arc<Config>,
    provider: Arc<dyn Provider>,
}

impl ModelLister {
    pub fn new(config: Arc<Config>, provider: Arc<dyn Provider>) -> Self {
        Self { config, provider }
    }

    /// Available model ids, sorted. Never fails: an unconfigured key or any
    /// provider error yields an empty list (errors are logged).
    pub async fn list_available_models(&self) -> Vec<String> {
        if !self.config.has_api_key() {
            return Vec::new();
        }

        match self.provider.list_models().await {
            Ok(models) => {
                let names = generation_models(models);
                log::debug!("{} generation models available", names.len());
                names
            }
            Err(e) => {
                log::warn!("Failed to list models: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::fake::{FakeProvider, model};

    fn lister(api_key: Option<&str>, provider: Arc<FakeProvider>) -> ModelLister {
        ModelLister::new(Arc::new(Config::with_api_key(api_key)), provider)
    }

    #[test]
    fn generation_models_filters_and_sorts() {
        let names = generation_models(vec![
            model("C", &["generateContent"]),
            model("B", &["embedContent"]),
            model("A", &["countTokens", "generateContent"]),
        ]);
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn generation_models_handles_empty_catalog() {
        assert!(generation_models(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn without_api_key_returns_empty_and_skips_provider() {
        let provider = Arc::new(FakeProvider::with_catalog(vec![model(
            "models/gemini-pro",
            &["generateContent"],
        )]));
        let models = lister(None, provider.clone()).list_available_models().await;
        assert!(models.is_empty());
        assert_eq!(provider.list_calls(), 0);
    }

    #[tokio::test]
    async fn returns_generation_capable_models_sorted() {
        let provider = Arc::new(FakeProvider::with_catalog(vec![
            model("A", &["generateContent"]),
            model("B", &["otherCapability"]),
            model("C", &["generateContent"]),
        ]));
        let models = lister(Some("key"), provider.clone())
            .list_available_models()
            .await;
        assert_eq!(models, vec!["A", "C"]);
        assert_eq!(provider.list_calls(), 1);
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_empty() {
        let provider = Arc::new(FakeProvider::default());
        let models = lister(Some("key"), provider.clone())
            .list_available_models()
            .await;
        assert!(models.is_empty());
        assert_eq!(provider.list_calls(), 1);
    }

    #[tokio::test]
    async fn repeated_calls_requery_and_agree() {
        let provider = Arc::new(FakeProvider::with_catalog(vec![
            model("models/gemini-pro", &["generateContent"]),
            model("models/gemini-flash", &["generateContent"]),
        ]));
        let lister = lister(Some("key"), provider.clone());
        let first = lister.list_available_models().await;
        let second = lister.list_available_models().await;
        assert_eq!(first, second);
        assert_eq!(first, vec!["models/gemini-flash", "models/gemini-pro"]);
        assert_eq!(provider.list_calls(), 2);
    }
}
