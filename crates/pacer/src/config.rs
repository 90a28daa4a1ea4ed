//! Command line configuration.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PACER_LOG_LEVEL` | info | Log level |
//! | `PACER_PRETTY` | true | Indent XML and JSON output |

use clap::{ArgAction, Parser};

use crate::commands::Command;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Pacer command line configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "pacer", version)]
#[command(about = "Inspect and convert Training Center XML (TCX) documents")]
pub struct CliConfig {
    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, env = "PACER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Indent converted output.
    #[arg(
        long,
        global = true,
        env = "PACER_PRETTY",
        default_value = "true",
        action = ArgAction::Set
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!(
                "Unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
