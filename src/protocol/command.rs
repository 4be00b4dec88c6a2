//! Command definitions
//!
//! Represents store operations requested by clients.

/// Operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    /// Whether the operation changes the mapping (needs exclusive access)
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Operation::Read)
    }

    /// Whether the request body carries the value
    pub fn takes_body(&self) -> bool {
        matches!(self, Operation::Create | Operation::Update)
    }
}

/// A fully-formed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a key that does not exist yet
    Create { key: String, value: String },

    /// Get a value by key
    Read { key: String },

    /// Overwrite a key that already exists
    Update { key: String, value: String },

    /// Remove a key
    Delete { key: String },
}

impl Command {
    /// Get the operation kind
    pub fn operation(&self) -> Operation {
        match self {
            Command::Create { .. } => Operation::Create,
            Command::Read { .. } => Operation::Read,
            Command::Update { .. } => Operation::Update,
            Command::Delete { .. } => Operation::Delete,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Command::Create { key, .. }
            | Command::Read { key }
            | Command::Update { key, .. }
            | Command::Delete { key } => key,
        }
    }
}
