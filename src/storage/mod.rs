use std::fmt::Debug;

use serde::Deserialize;
use serde::Serialize;

use crate::error::{Error, Result};

pub mod codec;

pub mod memory;

/// A key/value store, where both keys and values are arbitrary byte strings.
/// Keys carry no ordering; a missing key is reported as `Error::InvalidKey`
/// rather than an empty value.
///
/// The MapStore trait is designed as `trait object` compatible, so consumers
/// can hold a `Box<dyn MapStore>` and stay unaware of the concrete backend.
/// No internal synchronization is implied by the `Send + Sync` bound: mutation
/// goes through `&mut self`, callers sharing a store across threads must wrap
/// it themselves.
pub trait MapStore: Debug + Send + Sync {
    /// Gets the value for a key, fails with `Error::InvalidKey` if the key
    /// is not present.
    fn get(&self, key: &[u8]) -> Result<Vec<u8>>;

    /// Sets a value for a key, overwrite the existing value if any.
    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<()>;

    /// Deletes a key, fails with `Error::InvalidKey` if the key is not
    /// present, in which case the store is left untouched.
    fn delete(&mut self, key: &[u8]) -> Result<()>;

    fn contains(&self, key: &[u8]) -> Result<bool> {
        match self.get(key) {
            Ok(_) => Ok(true),
            Err(Error::InvalidKey(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StorageType {
    #[serde(alias = "memory")]
    Memory,
}

pub fn new_storage(typ: StorageType) -> Result<Box<dyn MapStore>> {
    match typ {
        StorageType::Memory => Ok(Box::new(memory::Memory::new())),
    }
}
