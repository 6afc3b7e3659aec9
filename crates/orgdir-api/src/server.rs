//! HTTP server bootstrap

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::{routes, state::AppState};

/// HTTP server hosting the resource API
pub struct ApiServer {
    listener: TcpListener,
    state: AppState,
}

impl ApiServer {
    /// Bind to `addr`. Port 0 picks an ephemeral port; the bound address is
    /// available through [`ApiServer::local_addr`].
    pub async fn bind(addr: SocketAddr, state: AppState) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, state })
    }

    /// The address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve requests until ctrl-c.
    pub async fn serve(self) -> std::io::Result<()> {
        let addr = self.listener.local_addr()?;
        info!("orgdir API listening on {}", addr);

        let app = routes::api_routes(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
