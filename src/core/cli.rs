//! CLI-only commands: config info and models list.
//!
//! These run without starting the server and produce plain text output.

use std::sync::Arc;

use crate::core::config::{API_KEY_VAR, Config};
use crate::core::models::ModelLister;
use crate::core::provider::GeminiClient;
use crate::core::util;

/// Run the `config` command: display bind address, directories, and API key status.
pub fn run_config(config: &Config) {
    let api_key_status = if config.has_api_key() {
        "set ✓".to_string()
    } else {
        format!("not set (define {} in .env)", API_KEY_VAR)
    };

    println!("Address:    http://{}", config.addr());
    println!("Static dir: {}", config.static_dir.display());
    println!("API base:   {}", config.api_base);
    println!("API key:    {}", api_key_status);
}

/// Run the `models` command: print generation-capable model ids, one per line.
/// Prints nothing when the key is missing or the provider cannot be reached.
pub async fn run_models(config: Config, query: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let provider = Arc::new(GeminiClient::from_config(&config)?);
    let models = ModelLister::new(config, provider).list_available_models().await;

    for id in util::filter_by_query(&models, query.unwrap_or(""), |m| m.as_str()) {
        println!("{}", id);
    }
    Ok(())
}
