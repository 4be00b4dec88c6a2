//! MemTable Module
//!
//! In-memory mapping from string keys to string values.
//!
//! ## Responsibilities
//! - Conditional create/update/delete with no implicit upserts
//! - Expose the full mapping for snapshot serialization
//!
//! ## Data Structure Choice
//! Plain `HashMap` without interior locking; the owning [`Store`](crate::Store)
//! decides how access is synchronized. Key order is irrelevant to every
//! operation and to the snapshot format.

mod table;

pub use table::MemTable;
