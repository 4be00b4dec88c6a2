//! # webkv
//!
//! A minimal in-memory key-value store exposed over HTTP, with:
//! - Path-as-key addressing on a single catch-all route
//! - Create/Read/Update/Delete with no implicit upserts
//! - Best-effort periodic snapshots to one JSON file
//! - An optional store-wide reader/writer gate ("safety mode")
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │               (one task per connection)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Request Dispatcher                           │
//! │      (method → operation, path → key, JSON envelope)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  request gate (safety mode)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Store                                 │
//! │              MemTable + SnapshotPolicy (RwLock)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  when a save is due
//!                       ▼
//!                ┌─────────────┐
//!                │  data.json  │
//!                └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod memtable;
pub mod snapshot;
pub mod protocol;
pub mod network;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::{Config, VerbMapping};
pub use store::{RequestGuard, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of webkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
