//! Shared application state for the request handlers

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::models::ModelLister;
use crate::core::provider::Provider;
use crate::core::story::StoryGenerator;

use super::ServerError;
use super::page::PageRenderer;

/// Read-only state shared by every request; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub models: ModelLister,
    pub stories: StoryGenerator,
    pub pages: PageRenderer,
}

impl AppState {
    pub fn new(config: Arc<Config>, provider: Arc<dyn Provider>) -> Result<Self, ServerError> {
        Ok(Self {
            models: ModelLister::new(Arc::clone(&config), Arc::clone(&provider)),
            stories: StoryGenerator::new(Arc::clone(&config), provider),
            pages: PageRenderer::new()?,
            config,
        })
    }
}
