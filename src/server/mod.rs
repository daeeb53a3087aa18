//! Web front-end: form page, story submission and static assets.

mod error;
mod http;
mod page;
mod state;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::core::config::Config;
use crate::core::provider::GeminiClient;

pub use error::ServerError;
pub use http::create_router;
pub use state::AppState;

/// The story web server
pub struct StoryServer {
    config: Arc<Config>,
    state: Arc<AppState>,
}

impl StoryServer {
    /// Create a server backed by the Gemini API
    pub fn new(config: Config) -> Result<Self, ServerError> {
        let config = Arc::new(config);
        let provider = Arc::new(GeminiClient::from_config(&config)?);
        let state = Arc::new(AppState::new(Arc::clone(&config), provider)?);
        Ok(Self { config, state })
    }

    /// Run the server until Ctrl-C, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let static_dir = &self.config.static_dir;
        std::fs::create_dir_all(static_dir).map_err(|e| ServerError::StaticDir {
            path: static_dir.display().to_string(),
            source: e,
        })?;

        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        log::info!("Listening on http://{}", addr);
        if !self.config.has_api_key() {
            log::warn!("GEMINI_API_KEY is not set; the model list will be empty");
        }

        axum::serve(listener, create_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServerError::Serve)?;

        log::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
