//! Store Module
//!
//! The key-value store that every request operates on.
//!
//! ## Responsibilities
//! - Conditional create/read/update/delete on the shared mapping
//! - Track change/save timestamps and snapshot when a save is due
//! - Seed the mapping from the snapshot file on startup
//! - Hand out request-scoped guards when safety mode is enabled

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{RwLock as GateLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::memtable::MemTable;
use crate::protocol::Command;
use crate::snapshot::{ChangeClock, Clock, SnapshotPolicy, SnapshotReader, SnapshotWriter, SystemClock};

/// The shared key-value store
///
/// ## Concurrency Model
///
/// Two layers of locking, always acquired in this order:
///
/// - **Request gate** (only when `safety` is enabled): an async RwLock over
///   the whole store, held by the dispatcher for an entire request. Mutating
///   requests hold it exclusively from the existence check through the body
///   read, the mutation and any snapshot write. Reads hold it shared.
///
/// - **State lock** (always): a `parking_lot::RwLock` around the mapping and
///   its snapshot policy. Each individual operation is atomic under it, and a
///   triggered snapshot is written while it is still held.
///
/// With safety disabled, requests interleave freely between operations. A
/// create that passed the existence check may still fail with `Conflict`
/// once its body has been read.
///
/// A slow body upload or a slow snapshot write blocks every other request
/// while the gate is held; nothing in the store times out.
pub struct Store {
    /// Store configuration
    config: Config,

    /// Mapping plus change/save clocks
    state: RwLock<StoreState>,

    /// Request-scoped reader/writer gate (`None` when safety is off)
    gate: Option<GateLock<()>>,

    /// Destination of snapshot writes
    writer: SnapshotWriter,

    /// Time source for the change/save clocks
    clock: Arc<dyn Clock>,
}

struct StoreState {
    table: MemTable,
    policy: SnapshotPolicy,
}

/// Request-scoped hold on the store gate
///
/// Dropping the guard releases the gate.
#[must_use = "the gate is released as soon as the guard is dropped"]
pub enum RequestGuard<'a> {
    Exclusive(RwLockWriteGuard<'a, ()>),
    Shared(RwLockReadGuard<'a, ()>),
    /// Safety mode is off; nothing is held
    Unguarded,
}

impl RequestGuard<'_> {
    pub fn is_held(&self) -> bool {
        !matches!(self, RequestGuard::Unguarded)
    }
}

impl Store {
    /// Open a store with the given config using the system clock
    pub fn open(config: Config) -> Result<Self> {
        Self::open_with_clock(config, Arc::new(SystemClock))
    }

    /// Open a store with an explicit clock
    ///
    /// On startup:
    /// 1. Create the snapshot's parent directory if needed
    /// 2. Load the snapshot if it exists and parses; otherwise start empty
    pub fn open_with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        if let Some(parent) = config.snapshot_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let reader = SnapshotReader::new(&config.snapshot_path);
        let table = match reader.load() {
            Ok(Some(entries)) => {
                tracing::info!(
                    path = %reader.path().display(),
                    entries = entries.len(),
                    "loaded snapshot"
                );
                MemTable::from_entries(entries)
            }
            Ok(None) => {
                tracing::debug!(path = %reader.path().display(), "no snapshot found, starting empty");
                MemTable::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %reader.path().display(),
                    error = %e,
                    "ignoring unreadable snapshot, starting empty"
                );
                MemTable::new()
            }
        };

        let state = StoreState {
            table,
            policy: SnapshotPolicy::new(config.save_interval_secs),
        };
        let gate = config.safety.then(|| GateLock::new(()));
        let writer = SnapshotWriter::new(&config.snapshot_path);

        Ok(Self {
            config,
            state: RwLock::new(state),
            gate,
            writer,
            clock,
        })
    }

    /// Open with a snapshot path (convenience method)
    ///
    /// Uses default config with the specified snapshot file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().snapshot_path(path).build();
        Self::open(config)
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation
    pub fn execute(&self, command: Command) -> Result<String> {
        match command {
            Command::Create { key, value } => self.create(&key, value),
            Command::Read { key } => self.read(&key),
            Command::Update { key, value } => self.update(&key, value),
            Command::Delete { key } => self.delete(&key),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Insert a new key; fails with `Conflict` if it already exists
    pub fn create(&self, key: &str, value: String) -> Result<String> {
        let mut state = self.state.write();
        state.table.create(key.to_string(), value.clone())?;
        self.commit(&mut state);
        Ok(value)
    }

    /// Look up a key; fails with `NotFound` if absent
    pub fn read(&self, key: &str) -> Result<String> {
        let state = self.state.read();
        state
            .table
            .get(key)
            .map(str::to_string)
            .ok_or(StoreError::NotFound)
    }

    /// Overwrite an existing key; fails with `NotFound` if absent
    pub fn update(&self, key: &str, value: String) -> Result<String> {
        let mut state = self.state.write();
        state.table.update(key, value.clone())?;
        self.commit(&mut state);
        Ok(value)
    }

    /// Remove a key and return its value; fails with `NotFound` if absent
    pub fn delete(&self, key: &str) -> Result<String> {
        let mut state = self.state.write();
        let removed = state.table.remove(key)?;
        self.commit(&mut state);
        Ok(removed)
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.state.read().table.contains(key)
    }

    /// Write a snapshot regardless of the schedule
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.write();
        self.writer.write(state.table.entries())?;
        state.policy.record_save(self.clock.now());

        tracing::info!(
            path = %self.writer.path().display(),
            entries = state.table.entry_count(),
            "flushed snapshot"
        );
        Ok(())
    }

    // =========================================================================
    // Request Gate
    // =========================================================================

    /// Acquire the gate for a mutating request
    pub async fn exclusive(&self) -> RequestGuard<'_> {
        match &self.gate {
            Some(gate) => RequestGuard::Exclusive(gate.write().await),
            None => RequestGuard::Unguarded,
        }
    }

    /// Acquire the gate for a read-only request
    pub async fn shared(&self) -> RequestGuard<'_> {
        match &self.gate {
            Some(gate) => RequestGuard::Shared(gate.read().await),
            None => RequestGuard::Unguarded,
        }
    }

    // =========================================================================
    // Snapshot Scheduling
    // =========================================================================

    /// Mark the change clock and snapshot if due (called with state lock held)
    fn commit(&self, state: &mut StoreState) {
        state.policy.record_change(self.clock.now());
        self.maybe_snapshot(state);
    }

    /// Write a snapshot if the policy says one is due
    ///
    /// A failed write leaves the save clock untouched, so the next mutation
    /// retries.
    fn maybe_snapshot(&self, state: &mut StoreState) {
        if !state.policy.is_due() {
            return;
        }

        match self.writer.write(state.table.entries()) {
            Ok(()) => {
                state.policy.record_save(self.clock.now());
                tracing::info!(
                    path = %self.writer.path().display(),
                    entries = state.table.entry_count(),
                    "saved snapshot to disk"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.writer.path().display(),
                    error = %e,
                    "snapshot save failed"
                );
            }
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.state.read().table.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().table.is_empty()
    }

    /// Current change/save timestamps
    pub fn change_clock(&self) -> ChangeClock {
        self.state.read().policy.clock()
    }

    /// Whether requests are serialized through the gate
    pub fn is_safe(&self) -> bool {
        self.gate.is_some()
    }

    /// Get the snapshot file path
    pub fn snapshot_path(&self) -> &Path {
        self.writer.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
