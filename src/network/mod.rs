//! Network Module
//!
//! HTTP server and request dispatch.
//!
//! ## Architecture
//! - One axum router with a single catch-all route (the path is the key)
//! - One tokio task per connection, driven by `axum::serve`
//! - Each request resolves to exactly one store command

mod handler;
mod server;

pub use handler::dispatch;
pub use server::{router, shutdown_signal, Server};
