//! alehoused: Alehouse daemon.
//!
//! Serves the beer catalog over gRPC.

use std::sync::Arc;

use clap::Parser;
use tonic::transport::Server;
use tracing::info;

use alehouse::Alehouse;
use alehouse::server::AlehouseService;
use alehouse::server::config::Config;
use alehouse::server::proto::beer_service_server::BeerServiceServer;
use alehouse::server::request_id;

/// Alehouse daemon serving the beer catalog.
#[derive(Parser)]
#[command(name = "alehoused")]
#[command(version = alehouse::PKG_VERSION)]
#[command(about = "Alehouse beer catalog daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: info; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(args.config.as_deref())?;
    let addr = config.server.socket_addr()?;

    let catalog = Alehouse::builder()
        .page_size(config.storage.page_size)
        .build()?;

    info!(version = alehouse::version_string(), %addr, "alehoused starting");

    // Create gRPC service and start server
    let service = AlehouseService::new(Arc::new(catalog));
    let server = BeerServiceServer::with_interceptor(service, request_id::intercept);

    Server::builder()
        .timeout(config.server.limits.request_timeout())
        .concurrency_limit_per_connection(config.server.limits.max_concurrent_requests)
        .add_service(server)
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    info!("alehoused stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
