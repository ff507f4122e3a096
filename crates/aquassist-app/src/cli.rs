//! CLI argument definitions for the AquaAssist binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "AQUASSIST_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "aquassist.toml";

/// AquaAssist - voice assistant for plant water consumption figures.
#[derive(Parser, Debug)]
#[command(name = "aquassist", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Consumption dataset to load instead of the configured one.
    #[arg(short = 'd', long = "dataset", global = true)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Serve the skill endpoint over HTTP.
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Answer one request envelope read from FILE, or stdin when omitted.
    Invoke { file: Option<PathBuf> },
    /// Ask the skill a single question and print the spoken reply.
    Ask {
        /// Intent name, or `launch` for a launch request.
        intent: String,
        #[arg(short = 's', long)]
        site: Option<String>,
    },
    /// List the configured sites and their dataset keys.
    Sites,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > AQUASSIST_CONFIG env var > ./aquassist.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        self.resolve_config_path_with(std::env::var(CONFIG_ENV).ok())
    }

    fn resolve_config_path_with(&self, env_value: Option<String>) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Some(p) = env_value.filter(|p| !p.is_empty()) {
            return PathBuf::from(p);
        }
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Resolve the dataset path.
    ///
    /// Priority: --dataset flag > config file value.
    pub fn resolve_dataset_path(&self, config_path: &str) -> PathBuf {
        self.dataset
            .clone()
            .unwrap_or_else(|| PathBuf::from(config_path))
    }
}
