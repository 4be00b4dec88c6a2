//! Snapshot Module
//!
//! Best-effort persistence of the whole mapping to a single JSON file.
//!
//! ## Responsibilities
//! - Seed the store once at startup from the snapshot file, if readable
//! - Rewrite the file wholesale (truncate + full write) when a save is due
//! - Track when the mapping last changed and when it was last saved
//!
//! ## File Format
//! ```text
//! {"key1":"value1","key2":"value2",...}\n
//! ```
//!
//! A crash between two saves loses every change made since the last save.
//! Writes are not atomic: a crash mid-write leaves a truncated file that the
//! next startup treats as malformed and ignores.

mod policy;
mod reader;
mod writer;

pub use policy::{ChangeClock, Clock, ManualClock, SnapshotPolicy, SystemClock};
pub use reader::SnapshotReader;
pub use writer::SnapshotWriter;
