//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::core::config::Config;

const AFTER_HELP: &str = "\
EXAMPLES:
  tres-palavras                                  Serve the web page on 127.0.0.1:8000
  tres-palavras --host 0.0.0.0 --port 3000       Serve on another address
  tres-palavras config                           Show configuration and API key status
  tres-palavras models                           List models that can write stories
  tres-palavras models --query flash             Only models whose id contains \"flash\"
  tres-palavras story banana foguete vovó -m models/gemini-1.5-flash
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Funny three-word stories written by a generative model",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory served under /static (overrides STATIC_DIR)
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Increase log verbosity (debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show configuration and API key status
    Config,
    /// List models that support text generation
    Models {
        /// Only show models whose id contains this text
        #[arg(long)]
        query: Option<String>,
    },
    /// Write one story and print it to stdout
    Story {
        word1: String,
        word2: String,
        word3: String,
        /// Model id as listed by `models` (e.g. models/gemini-1.5-flash)
        #[arg(short = 'm', long)]
        model: String,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 1 {
            "debug"
        } else {
            "info"
        }
    }

    /// Apply command-line overrides on top of the environment configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.static_dir = dir.clone();
        }
    }
}
