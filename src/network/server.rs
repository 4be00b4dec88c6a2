//! HTTP Server
//!
//! Binds the listening socket and serves the dispatcher.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::{TcpListener, TcpSocket};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::store::Store;

use super::dispatch;

/// HTTP server for webkv
pub struct Server {
    config: Config,
    store: Arc<Store>,
}

impl Server {
    /// Create a new server with the given config and store
    pub fn new(config: Config, store: Arc<Store>) -> Self {
        Self { config, store }
    }

    /// Build the router serving this server's store
    pub fn router(&self) -> Router {
        router(Arc::clone(&self.store))
    }

    /// Bind the listen address with `SO_REUSEADDR` set
    ///
    /// Must be called from within a tokio runtime.
    pub fn bind(&self) -> Result<TcpListener> {
        let addr: SocketAddr = self.config.listen_addr.parse().map_err(|e| {
            StoreError::Config(format!(
                "invalid listen address '{}': {}",
                self.config.listen_addr, e
            ))
        })?;

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;

        Ok(socket.listen(self.config.listen_backlog)?)
    }

    /// Start the server and run until Ctrl+C
    pub async fn run(self) -> Result<()> {
        let listener = self.bind()?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    ///
    /// In-flight requests are drained, then a final snapshot is written.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!(
            addr = %local_addr,
            safety = self.store.is_safe(),
            verbs = %self.config.verb_mapping,
            "starting web service"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("listener closed, writing final snapshot");
        self.store.flush()
    }
}

/// Build the single catch-all route around a store
pub fn router(store: Arc<Store>) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Resolve on Ctrl+C
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl+C, initiating shutdown"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}
