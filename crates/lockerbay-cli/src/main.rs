use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "lockerbay",
    about = "lockerbay — locker robot facility tooling",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a facility config builds
    Validate {
        /// Path to facility.toml
        #[arg(short, long, default_value = "facility.toml")]
        config: PathBuf,
    },
    /// Print the capacity report for a facility
    Report {
        #[arg(short, long, default_value = "facility.toml")]
        config: PathBuf,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Store bags through one manager, optionally claim some back, then report.
    ///
    /// Storing stops at the first bag the manager cannot place.
    Simulate {
        #[arg(short, long, default_value = "facility.toml")]
        config: PathBuf,
        /// Number of bags to store
        #[arg(short, long)]
        bags: u32,
        /// Index of the manager receiving the bags
        #[arg(short, long, default_value_t = 0)]
        manager: usize,
        /// Number of stored bags to retrieve again, oldest first
        #[arg(short, long, default_value_t = 0)]
        retrieve: u32,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

const DEFAULT_LOG_FILTER: &str = "lockerbay=info";

/// `RUST_LOG` when set and valid, otherwise [`DEFAULT_LOG_FILTER`].
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Logs go to stderr so reports on stdout stay parseable.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => commands::report::validate(&config),
        Commands::Report { config, format } => commands::report::report(&config, format),
        Commands::Simulate {
            config,
            bags,
            manager,
            retrieve,
            format,
        } => commands::simulate::run(
            &config,
            &commands::simulate::SimulateOptions {
                bags,
                manager,
                retrieve,
                format,
            },
        ),
    }
}
