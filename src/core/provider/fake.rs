//! In-memory provider for tests: canned catalog and replies, with call counters.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::models::ModelInfo;

use super::{Provider, ProviderError};

#[derive(Default)]
pub(crate) struct FakeProvider {
    catalog: Option<Vec<ModelInfo>>,
    reply: Option<String>,
    list_calls: AtomicUsize,
    generate_calls: AtomicUsize,
    last_request: Mutex<Option<(String, String)>>,
}

pub(crate) fn model(name: &str, methods: &[&str]) -> ModelInfo {
    ModelInfo {
        name: name.to_string(),
        supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
    }
}

impl FakeProvider {
    /// Listing returns `catalog`; generation fails unless [`FakeProvider::replying`] is set.
    pub fn with_catalog(catalog: Vec<ModelInfo>) -> Self {
        Self {
            catalog: Some(catalog),
            ..Self::default()
        }
    }

    /// Generation returns `text` for known models.
    pub fn replying(mut self, text: &str) -> Self {
        self.reply = Some(text.to_string());
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn last_model(&self) -> Option<String> {
        self.last_request
            .lock()
            .unwrap()
            .as_ref()
            .map(|(model, _)| model.clone())
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_request
            .lock()
            .unwrap()
            .as_ref()
            .map(|(_, prompt)| prompt.clone())
    }
}

#[async_trait]
impl Provider for FakeProvider {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.catalog.clone().ok_or_else(|| ProviderError::Api {
            status: 503,
            message: "catalog unavailable".to_string(),
        })
    }

    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((model.to_string(), prompt.to_string()));

        let known = self
            .catalog
            .as_ref()
            .is_some_and(|c| c.iter().any(|m| m.name == model));
        match &self.reply {
            Some(text) if known => Ok(text.clone()),
            _ => Err(ProviderError::Api {
                status: 404,
                message: format!("{} is not found for API version v1beta", model),
            }),
        }
    }
}
