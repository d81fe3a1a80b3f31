//! cf-service-use - Main entry point

use clap::Parser;
use log::{debug, info};

use cf_service_use::{run_service_use_command, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting cf-service-use v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: api={:?}, output={}, concurrency={}, batch={}",
        cli.api, cli.output, cli.concurrency, cli.batch
    );

    match run_service_use_command(&cli).await {
        Ok(()) => info!("Completed successfully"),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
