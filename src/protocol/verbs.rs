//! Verb and path handling
//!
//! Resolves HTTP methods to operations and paths to keys.

use axum::http::Method;
use percent_encoding::percent_decode_str;

use crate::config::VerbMapping;
use crate::error::{Result, StoreError};

use super::Operation;

/// Resolve an HTTP method to an operation under the given verb mapping
pub fn resolve_operation(method: &Method, mapping: VerbMapping) -> Result<Operation> {
    let op = match *method {
        Method::GET => Operation::Read,
        Method::DELETE => Operation::Delete,
        Method::POST => match mapping {
            VerbMapping::PostCreates => Operation::Create,
            VerbMapping::PutCreates => Operation::Update,
        },
        Method::PUT => match mapping {
            VerbMapping::PostCreates => Operation::Update,
            VerbMapping::PutCreates => Operation::Create,
        },
        _ => return Err(StoreError::BadMethod),
    };
    Ok(op)
}

/// Derive the store key from a request path
///
/// The path is percent-decoded, then only the leading `/` is removed. `/`
/// maps to the empty key, `/a//b/` to `a//b/` and `/hello%20world` to
/// `hello world`. Invalid UTF-8 after decoding is replaced with U+FFFD.
pub fn key_from_path(path: &str) -> String {
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    decoded.strip_prefix('/').unwrap_or(&decoded).to_string()
}
