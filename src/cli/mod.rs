//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// Mediators - OpenHIM registration and FHIR helpers
#[derive(Parser, Debug)]
#[command(name = "mediators")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (environment only if it does not exist)
    #[arg(short, long, default_value = "mediators.toml", env = "MEDIATORS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MEDIATORS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate, register mediators and install their default channels
    Register(commands::register::RegisterArgs),

    /// Provision an OpenHIM API client
    CreateClient(commands::create_client::CreateClientArgs),

    /// Generate a cross-border patient identifier
    CrossBorderId(commands::cross_border_id::CrossBorderIdArgs),

    /// Print the patient summary for a cross-border identifier
    Summary(commands::summary::SummaryArgs),

    /// Validate configuration and the mediator catalog
    ValidateConfig(commands::validate::ValidateArgs),
}
