//! Process bootstrap: CLI, config, logging, then the accept loop.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use highscore_server::config::{load_config, ServerConfig};
use highscore_server::routing::Dispatcher;
use highscore_server::site::VisitCounter;
use highscore_server::store::MemoryScoreStore;
use highscore_server::transport::Listener;
use highscore_server::{observability, Server, Shutdown};

#[derive(Parser)]
#[command(name = "highscore-server")]
#[command(about = "Game highscore web server over a line-delimited transport", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listening port from the config file.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(port) = args.port {
        let mut addr: SocketAddr = config.listener.bind_address.parse()?;
        addr.set_port(port);
        config.listener.bind_address = addr.to_string();
    }

    observability::logging::init(&config.observability.log_filter);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_connections = config.listener.max_connections,
        site_title = %config.site.title,
        "Configuration loaded"
    );

    let store = Arc::new(MemoryScoreStore::new());
    let counter = VisitCounter::new();
    let dispatcher = Dispatcher::new(store, counter, config.site.clone());

    let listener = Listener::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    Server::new(dispatcher)
        .run(listener, shutdown.subscribe())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
