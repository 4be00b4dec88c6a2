//! Request Dispatcher
//!
//! Turns one HTTP request into one store command.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, Uri};
use bytes::Bytes;

use crate::error::{Result, StoreError};
use crate::protocol::{key_from_path, resolve_operation, Command, Operation, Response, Status};
use crate::store::Store;

/// Catch-all handler: every path is a key
pub async fn dispatch(
    State(store): State<Arc<Store>>,
    method: Method,
    uri: Uri,
    body: Body,
) -> Response {
    let key = key_from_path(uri.path());

    let response = match resolve_operation(&method, store.config().verb_mapping) {
        Ok(op) => match execute(&store, op, key.clone(), body).await {
            Ok(value) => Response::ok(value),
            Err(e) => Response::from(e),
        },
        Err(e) => Response::from(e),
    };

    if response.status == Status::InternalError {
        tracing::warn!(%method, key = %key, error = %response.message, "request failed");
    } else {
        tracing::debug!(%method, key = %key, status = ?response.status, "request dispatched");
    }

    response
}

/// Run one operation under the request gate
///
/// For create and update the existence check happens before the body is
/// read, so a doomed request never waits on its upload.
async fn execute(store: &Store, op: Operation, key: String, body: Body) -> Result<String> {
    let _guard = if op.is_mutating() {
        store.exclusive().await
    } else {
        store.shared().await
    };

    let command = if op.takes_body() {
        let exists = store.contains(&key);
        match op {
            Operation::Create if exists => return Err(StoreError::Conflict),
            Operation::Update if !exists => return Err(StoreError::NotFound),
            _ => {}
        }

        let value = read_body(body).await?;
        match op {
            Operation::Create => Command::Create { key, value },
            _ => Command::Update { key, value },
        }
    } else if op == Operation::Read {
        Command::Read { key }
    } else {
        Command::Delete { key }
    };

    tracing::trace!(operation = ?command.operation(), key = %command.key(), "executing command");
    store.execute(command)
}

/// Read the whole body as the value; invalid UTF-8 is replaced, not rejected
async fn read_body(body: Body) -> Result<String> {
    let bytes: Bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| StoreError::Body(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
