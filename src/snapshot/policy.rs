//! Snapshot Policy
//!
//! Decides when a mutation should be followed by a snapshot write.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock time in whole seconds
pub trait Clock: Send + Sync {
    /// Seconds since the unix epoch
    fn now(&self) -> u64;
}

/// Clock backed by the system wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Clock that only moves when told to
///
/// Useful for driving the snapshot schedule deterministically.
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: AtomicU64,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            secs: AtomicU64::new(start),
        }
    }

    pub fn set(&self, secs: u64) {
        self.secs.store(secs, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: u64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.secs.load(Ordering::SeqCst)
    }
}

/// Timestamps of the most recent change and the most recent completed save
///
/// Both fields only ever move forward. They start at zero, so the first
/// change after startup is always far enough from the "last save" to be due.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChangeClock {
    pub last_changed_at: u64,
    pub last_saved_at: u64,
}

impl ChangeClock {
    pub fn mark_changed(&mut self, now: u64) {
        self.last_changed_at = self.last_changed_at.max(now);
    }

    pub fn mark_saved(&mut self, now: u64) {
        self.last_saved_at = self.last_saved_at.max(now);
    }

    /// Seconds between the last save and the last change (zero if saved since)
    pub fn unsaved_span(&self) -> u64 {
        self.last_changed_at.saturating_sub(self.last_saved_at)
    }
}

/// Interval threshold plus the clock pair it is evaluated against
#[derive(Debug, Clone)]
pub struct SnapshotPolicy {
    interval_secs: u64,
    clock: ChangeClock,
}

impl SnapshotPolicy {
    pub fn new(interval_secs: u64) -> Self {
        Self {
            interval_secs,
            clock: ChangeClock::default(),
        }
    }

    /// Record a successful mutation at `now`
    pub fn record_change(&mut self, now: u64) {
        self.clock.mark_changed(now);
    }

    /// Record a completed snapshot at `now`
    pub fn record_save(&mut self, now: u64) {
        self.clock.mark_saved(now);
    }

    /// A snapshot is due once the last change is at least one interval past the last save
    pub fn is_due(&self) -> bool {
        self.clock.unsaved_span() >= self.interval_secs
    }

    pub fn clock(&self) -> ChangeClock {
        self.clock
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }
}
