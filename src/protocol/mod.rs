//! Protocol Module
//!
//! Defines how HTTP requests map onto store commands and how outcomes are
//! rendered back to clients.
//!
//! ## Request Mapping
//! - Path: the key, with the leading `/` stripped (`/foo/bar` → `foo/bar`)
//! - GET    → Read
//! - DELETE → Delete
//! - POST / PUT → Create / Update, assignment chosen by [`VerbMapping`]
//! - anything else → 400 without touching the store
//!
//! ## Response Format
//! ```text
//! {"success":"true"|"false","message":"<value or error text>"}
//! ```
//! `success` is the *string* `"true"` exactly when the status is 200.
//!
//! [`VerbMapping`]: crate::config::VerbMapping

mod command;
mod response;
mod verbs;

pub use command::{Command, Operation};
pub use response::{Envelope, Response, Status};
pub use verbs::{key_from_path, resolve_operation};
