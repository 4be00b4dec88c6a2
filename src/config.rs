//! Configuration for webkv
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::StoreError;

/// Main configuration for a webkv instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Snapshot Configuration
    // -------------------------------------------------------------------------
    /// Path of the single JSON snapshot file
    pub snapshot_path: PathBuf,

    /// Minimum distance in seconds between the last change and the last save
    /// before a mutation triggers a new snapshot
    pub save_interval_secs: u64,

    // -------------------------------------------------------------------------
    // Concurrency Configuration
    // -------------------------------------------------------------------------
    /// Hold a store-wide reader/writer gate for the duration of each request
    pub safety: bool,

    // -------------------------------------------------------------------------
    // HTTP Configuration
    // -------------------------------------------------------------------------
    /// Which verbs perform Create and Update
    pub verb_mapping: VerbMapping,

    /// TCP listen address
    pub listen_addr: String,

    /// Pending connection backlog passed to listen(2)
    pub listen_backlog: u32,
}

/// Assignment of the create and update operations to HTTP verbs
///
/// GET always reads and DELETE always deletes; only POST and PUT swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerbMapping {
    /// POST creates, PUT updates
    #[default]
    PostCreates,

    /// PUT creates, POST updates
    PutCreates,
}

impl VerbMapping {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerbMapping::PostCreates => "post-creates",
            VerbMapping::PutCreates => "put-creates",
        }
    }
}

impl fmt::Display for VerbMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerbMapping {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "post-creates" => Ok(VerbMapping::PostCreates),
            "put-creates" => Ok(VerbMapping::PutCreates),
            other => Err(StoreError::Config(format!(
                "unknown verb mapping '{}', expected 'post-creates' or 'put-creates'",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("data.json"),
            save_interval_secs: 30,
            safety: false,
            verb_mapping: VerbMapping::PostCreates,
            listen_addr: "0.0.0.0:8080".to_string(),
            listen_backlog: 1024,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the snapshot file path
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.snapshot_path = path.into();
        self
    }

    /// Set the snapshot interval (in seconds)
    pub fn save_interval_secs(mut self, secs: u64) -> Self {
        self.config.save_interval_secs = secs;
        self
    }

    /// Enable or disable the request gate
    pub fn safety(mut self, enabled: bool) -> Self {
        self.config.safety = enabled;
        self
    }

    /// Set the create/update verb assignment
    pub fn verb_mapping(mut self, mapping: VerbMapping) -> Self {
        self.config.verb_mapping = mapping;
        self
    }

    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the listen backlog
    pub fn listen_backlog(mut self, backlog: u32) -> Self {
        self.config.listen_backlog = backlog;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
