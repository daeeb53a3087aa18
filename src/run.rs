//! Application run modes: logger init, web server, one-shot story.

use std::sync::Arc;

use crate::cli::Args;
use crate::core::config::Config;
use crate::core::provider::GeminiClient;
use crate::core::story::{StoryGenerator, StoryRequest};
use crate::server::StoryServer;

/// Initialize env_logger; RUST_LOG takes precedence over -v/-q.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Serve the web page until Ctrl-C.
pub async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    StoryServer::new(config)?.run().await?;
    Ok(())
}

/// Generate one story and print it. Exits with status 1 on failure.
pub async fn run_story(
    config: Config,
    request: StoryRequest,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let provider = Arc::new(GeminiClient::from_config(&config)?);
    let generator = StoryGenerator::new(config, provider);

    match generator.generate_story(&request).await {
        Ok(story) => {
            println!("{}", story);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
