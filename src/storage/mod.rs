//! Storage capability - pluggable key-value persistence for snapshots.

mod backend;
mod file;
mod in_memory;

use std::fmt;

/// Error type for storage backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A lock guarding shared storage was poisoned.
    LockPoisoned(&'static str),
    /// An IO failure from a durable backend.
    Io(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
            StorageError::Io(msg) => write!(f, "storage io error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub use backend::StorageBackend;
pub use file::FileStorage;
pub use in_memory::InMemoryStorage;
