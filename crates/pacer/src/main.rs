//! Pacer
//!
//! Inspects and converts Training Center XML (TCX) documents.

mod commands;
mod config;

use clap::Parser;
use config::CliConfig;

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over the
/// configured level.
fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "pacer={level},pacer_serde={level},pacer_serde_support={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(2);
    }

    commands::run(&config)
}
