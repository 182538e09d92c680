//! Obligations CLI - Command Line Operations for Filing Schedules
//!
//! This is the operational entry point for the obligation schedule generator.
//!
//! # Commands
//!
//! - `obligations schedule --obligations <file>` - List filings due in a window
//! - `obligations check --obligations <file>` - Validate stored obligation records

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use obligation_core::types::Date;
use service_cli::commands;
use service_cli::config::{build_config, CliArgs};
use service_cli::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filing obligation schedule generator
#[derive(Parser)]
#[command(name = "obligations")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the filings due inside a date window
    Schedule {
        /// Path to a JSON array of obligation records
        #[arg(short, long)]
        obligations: PathBuf,

        /// First day of the window (YYYY-MM-DD), defaults to today (UTC)
        #[arg(short, long)]
        start: Option<String>,

        /// Last day of the window (YYYY-MM-DD), defaults to today plus the window length
        #[arg(short, long)]
        end: Option<String>,

        /// Days covered when no end date is given
        #[arg(long)]
        window_days: Option<u64>,

        /// Output format (json, table)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Validate obligation records without generating schedules
    Check {
        /// Path to a JSON array of obligation records
        #[arg(short, long)]
        obligations: PathBuf,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (window_days, format) = match &cli.command {
        Commands::Schedule {
            window_days,
            format,
            ..
        } => (*window_days, format.clone()),
        Commands::Check { .. } => (None, None),
    };
    let log_level = if cli.verbose {
        Some("debug".to_string())
    } else {
        cli.log_level.clone()
    };
    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        log_level,
        window_days,
        format,
    })?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        version = service_cli::VERSION,
        log_level = %config.log_level,
        default_window_days = config.default_window_days,
        output_format = %config.output_format,
        "configuration loaded"
    );

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Schedule {
            obligations,
            start,
            end,
            ..
        } => commands::schedule::run(
            &obligations,
            start.as_deref(),
            end.as_deref(),
            Date::today_utc(),
            &config,
            &mut stdout,
        )
        .map(|_| ()),
        Commands::Check { obligations } => {
            commands::check::run(&obligations, &mut stdout).map(|_| ())
        }
    }
}
