use anyhow::Result;
use rmcp::{ServiceExt, transport::stdio};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use local_command_server::server::CommandServer;

#[tokio::main]
async fn main() {
    // stdout carries the MCP transport; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    if let Err(err) = run().await {
        error!("server error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    info!("starting local-command-server on stdio");
    let service = CommandServer::new().serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
