//! # Três Palavras
//!
//! A small web front-end: pick a generative model, type three words, and get a
//! funny short story written with them.
//!
//! ## Modes
//! - Web server (default): `GET /` form, `POST /generate`, `/static/*` assets
//! - `config`: show configuration and API key status
//! - `models`: list models that support text generation
//! - `story`: write one story to stdout

mod cli;
mod core;
mod run;
mod server;

use clap::Parser;
use dotenv::dotenv;

use crate::cli::{Args, Commands};
use crate::core::story::StoryRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    // Missing API key is fine here; only malformed values stop startup.
    let mut config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    args.apply_overrides(&mut config);

    match args.command {
        None => run::run_server(config).await,
        Some(Commands::Config) => {
            core::cli::run_config(&config);
            Ok(())
        }
        Some(Commands::Models { query }) => core::cli::run_models(config, query.as_deref()).await,
        Some(Commands::Story {
            word1,
            word2,
            word3,
            model,
        }) => {
            let request = StoryRequest {
                word1,
                word2,
                word3,
                selected_model: model,
            };
            run::run_story(config, request).await
        }
    }
}
