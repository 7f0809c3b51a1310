mod config;
mod metrics;
mod report;
mod speedup;

#[cfg(test)]
mod report_test;

use clap::Parser;
use config::SpeedupConfig;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Compute the speed-up between a sequential and a concurrent metrics log")]
struct Cli {
    /// Config file with the metrics and output paths
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => match SpeedupConfig::load(&path) {
            Ok(config) => config,
            Err(error) => {
                error!(
                    error = ?error,
                    "Failed to load config from {}, continuing with defaults",
                    path.display()
                );

                SpeedupConfig::default()
            }
        },
        None => SpeedupConfig::default(),
    };

    report::run(&config);
}
