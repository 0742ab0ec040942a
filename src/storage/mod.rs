//! Persistence layer
//!
//! A small key-value abstraction with JSON values. The durable backend is
//! SQLite; tests inject [`memory::MemoryStore`] instead. Every mutation in
//! the core is a read-modify-write of a whole collection under one key, so
//! a write either fully replaces the persisted value or does not happen.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{HfError, Result};

/// Durable string-keyed, string-valued store.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
}

/// Typed JSON access on top of any [`KvStore`].
pub trait KvStoreExt: KvStore {
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| HfError::Serialization(format!("decode {key}: {e}"))),
            None => Ok(None),
        }
    }

    fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| HfError::Serialization(format!("encode {key}: {e}")))?;
        self.put(key, &raw)
    }
}

impl<S: KvStore + ?Sized> KvStoreExt for S {}
