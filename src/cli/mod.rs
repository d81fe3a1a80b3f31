//! CLI argument parsing

mod common;

use clap::Parser;

use crate::config::defaults;

pub use common::OutputFormat;

/// Cloud Foundry service usage report
#[derive(Parser, Debug)]
#[command(name = "cf-service-use")]
#[command(version)]
#[command(
    about = "Show every service offering, its plans, instances, and the orgs and spaces that own them",
    long_about = None
)]
pub struct Cli {
    /// Cloud Foundry API endpoint (falls back to CF_API, then the CF CLI target)
    #[arg(short = 'a', long)]
    pub api: Option<String>,

    /// Access token (falls back to CF_TOKEN, then the CF CLI login)
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Skip verification of the API endpoint's TLS certificate
    #[arg(long, default_value_t = false)]
    pub skip_ssl_validation: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Omit headers and totals in table/CSV output
    #[arg(long, default_value_t = false)]
    pub no_header: bool,

    /// Maximum siblings resolved concurrently at each level (1 = sequential)
    #[arg(
        short,
        long,
        default_value_t = defaults::CONCURRENCY,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub concurrency: usize,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner or progress output
    #[arg(short, long, default_value_t = false)]
    pub batch: bool,
}
