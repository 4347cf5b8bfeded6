use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use ferrous_locator_application::use_cases::ServiceLocator;
use ferrous_locator_domain::{CliOverrides, LookupStatus};
use ferrous_locator_infrastructure::dns::HickoryTxtResolver;
use ferrous_locator_jobs::{JobRunner, LocatorRefreshJob};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod report;

#[derive(Parser)]
#[command(name = "ferrous-locator")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Locator - discover gateway endpoints from DNS TXT records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Name whose TXT record describes the gateway
    #[arg(short = 'f', long)]
    fqdn: Option<String>,

    /// Recursive nameserver (ip:port)
    #[arg(short = 'n', long)]
    nameserver: Option<SocketAddr>,

    /// Query over TCP only
    #[arg(long)]
    tcp: bool,

    /// Keep refreshing the endpoints until Ctrl-C
    #[arg(short = 'w', long)]
    watch: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        fqdn: cli.fqdn.clone(),
        nameserver: cli.nameserver,
        force_tcp: cli.tcp,
        watch: cli.watch,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Locator v{}", env!("CARGO_PKG_VERSION"));

    let fqdn = config
        .locator
        .fqdn
        .clone()
        .context("No name to look up: pass --fqdn or set locator.fqdn")?;

    let resolver = Arc::new(HickoryTxtResolver::from_config(&config.resolver));
    let locator = ServiceLocator::new(resolver, tokio::runtime::Handle::current());

    let status = locator
        .lookup_and_wait(&fqdn)
        .await
        .context("Initial lookup did not start")?;

    print!("{}", report::render(&locator.snapshot(), Utc::now()));

    if !config.refresh.enabled {
        if status != LookupStatus::Success {
            anyhow::bail!("Lookup of {} finished with status {}", fqdn, status);
        }
        return Ok(());
    }

    let shutdown = CancellationToken::new();
    let job = LocatorRefreshJob::from_config(locator.clone(), fqdn.as_str(), &config.refresh);
    let handles = JobRunner::new()
        .with_locator_refresh(job)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    info!("Shutdown requested");
    shutdown.cancel();

    for handle in handles {
        if let Err(e) = handle.await {
            warn!(error = %e, "Background job ended abnormally");
        }
    }

    print!("{}", report::render(&locator.snapshot(), Utc::now()));
    info!("Locator shutdown complete");
    Ok(())
}
