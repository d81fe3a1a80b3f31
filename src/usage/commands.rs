//! Service usage command handler

use log::{debug, info};
use std::io::{self, Write};

use crate::cf::{CfApi, CfClient, EndpointResolver, TokenResolver};
use crate::cli::Cli;
use crate::output::output_hierarchy;
use crate::ui::{clear_spinner, create_spinner};

use super::ServiceWalker;

/// Run the service usage report against the configured API session
pub async fn run_service_use_command(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let endpoint = EndpointResolver::new().resolve(cli.api.as_deref(), cli.skip_ssl_validation)?;
    let token = TokenResolver::new().resolve(cli.token.as_deref())?;

    debug!(
        "Connecting to {} (skip SSL validation: {})",
        endpoint.url, endpoint.skip_ssl_validation
    );
    let client = CfClient::new(token, endpoint.url, endpoint.skip_ssl_validation);

    report_service_use(&client, cli, &mut io::stdout()).await
}

/// Walk the hierarchy through `api` and write the report to `out`
///
/// Nothing is written unless the whole walk succeeds.
pub async fn report_service_use<A, W>(
    api: &A,
    cli: &Cli,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>>
where
    A: CfApi + ?Sized,
    W: Write,
{
    let spinner = create_spinner("Getting service instances...", cli.batch);

    let walker = ServiceWalker::new(api, cli.concurrency);
    let result = walker.walk().await;
    clear_spinner(spinner);
    let hierarchy = result?;

    info!(
        "Found {} services, {} plans, {} instances across {} organizations",
        hierarchy.services.len(),
        hierarchy.plan_count(),
        hierarchy.instance_count(),
        walker.cache().len()
    );

    output_hierarchy(&hierarchy, cli.output, cli.no_header, out)?;
    Ok(())
}
