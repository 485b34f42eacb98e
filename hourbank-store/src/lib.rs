//! Storage abstraction for the Hourbank components.
//!
//! Components never own their state. Every operation receives a handle
//! to a string-keyed byte store and reads and writes through it, so the
//! same component code runs against any backend that implements
//! [`KvStore`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while encoding or decoding stored values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("failed to encode value for key '{key}': {reason}")]
    Encode { key: String, reason: String },
    #[error("failed to decode value at key '{key}': {reason}")]
    Decode { key: String, reason: String },
}

/// A string-keyed byte store.
///
/// Absent keys read as `None`; callers decide what absence means
/// (a zero balance, a missing proposal). `put` replaces any previous
/// value and never deletes.
pub trait KvStore {
    /// Returns the bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: Vec<u8>);

    /// Returns true if `key` currently holds a value.
    fn exists(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// In-memory store backend for tests and single-process use.
/// A durable backend would implement [`KvStore`] over its own storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over stored keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: Vec<u8>) {
        self.entries.insert(key.to_string(), value);
    }

    fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

/// Encodes `value` for storage under `key`.
///
/// Mutating operations encode every value before their first write, so
/// a codec failure cannot leave a partial update behind.
pub fn encode_value<T: Serialize>(key: &str, value: &T) -> Result<Vec<u8>, StoreError> {
    bincode::serialize(value).map_err(|e| StoreError::Encode {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Decodes a value previously stored under `key`.
pub fn decode_value<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, StoreError> {
    bincode::deserialize(bytes).map_err(|e| StoreError::Decode {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Reads and decodes the value at `key`, or `None` when absent.
pub fn get_value<S, T>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    S: KvStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key) {
        Some(bytes) => Ok(Some(decode_value(key, &bytes)?)),
        None => Ok(None),
    }
}

/// Encodes and stores `value` under `key` in one step.
///
/// Only safe as the sole write of an operation; multi-write operations
/// stage their encoded values first with [`encode_value`].
pub fn put_value<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KvStore + ?Sized,
    T: Serialize,
{
    let bytes = encode_value(key, value)?;
    store.put(key, bytes);
    Ok(())
}
