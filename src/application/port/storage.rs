// SPDX-License-Identifier: MPL-2.0
//! Persistent key/value storage port.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing medium could not be written.
    Write(String),
    /// The value could not be encoded.
    Encode(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Write(msg) => write!(f, "storage write failed: {msg}"),
            StorageError::Encode(msg) => write!(f, "storage encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Small string key/value store that survives restarts.
///
/// Reads never fail: an unreadable or missing entry is `None`. Writes report
/// failures, which callers log and otherwise ignore.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
