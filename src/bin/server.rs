//! webkv Server Binary
//!
//! Starts the HTTP server for webkv.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use webkv::network::Server;
use webkv::{Config, Store, VerbMapping};

/// webkv Server
#[derive(Parser, Debug)]
#[command(name = "webkv-server")]
#[command(about = "In-memory key-value store over HTTP")]
#[command(version)]
struct Args {
    /// Serialize requests through a store-wide reader/writer lock
    #[arg(long)]
    safety: bool,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Snapshot file
    #[arg(short, long, default_value = "data.json")]
    snapshot: String,

    /// Seconds of unsaved changes before a mutation triggers a snapshot
    #[arg(long, default_value = "30")]
    save_interval: u64,

    /// Which verb creates: post-creates (PUT updates) or put-creates (POST updates)
    #[arg(long, default_value = "post-creates")]
    verbs: VerbMapping,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,webkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("webkv Server v{}", webkv::VERSION);
    tracing::info!("Snapshot file: {}", args.snapshot);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .snapshot_path(&args.snapshot)
        .save_interval_secs(args.save_interval)
        .safety(args.safety)
        .verb_mapping(args.verbs)
        .build();

    let store = Store::open(config.clone()).context("failed to open store")?;
    tracing::info!(keys = store.len(), "store initialized");

    let server = Server::new(config, Arc::new(store));
    server.run().await.context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
