//! orgdir API server binary

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use orgdir_api::{ApiServer, AppState};
use orgdir_store::OrgStore;
use tracing_subscriber::EnvFilter;

/// RESTful hypermedia CRUD service for companies, departments, and teams
#[derive(Debug, Parser)]
#[command(name = "orgdir-api", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, env = "ORGDIR_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "ORGDIR_PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let addr = SocketAddr::new(args.host, args.port);

    let state = AppState::new(OrgStore::new());
    let server = ApiServer::bind(addr, state).await?;
    server.serve().await
}
