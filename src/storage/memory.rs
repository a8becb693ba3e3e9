use std::collections::HashMap;

use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::codec::hexcodec;
use super::MapStore;
use crate::error::{Error, Result};

/// An in-memory store backed by a `HashMap`. Nothing is persisted; the
/// contents can be carried around as JSON via `to_json`/`from_json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    data: HashMap<Vec<u8>, Vec<u8>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory { data: HashMap::new() }
    }

    /// Creates a store that takes ownership of an existing mapping.
    pub fn with_data(data: HashMap<Vec<u8>, Vec<u8>>) -> Memory {
        Memory { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the key/value pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> + '_ {
        self.data.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    pub fn into_inner(self) -> HashMap<Vec<u8>, Vec<u8>> {
        self.data
    }

    /// Encodes the whole store as a JSON object of hex strings.
    pub fn to_json(&self) -> Result<String> {
        let json = hexcodec::serialize(&self.data)?;
        debug!("encoded {} entries into {} bytes", self.data.len(), json.len());
        Ok(json)
    }

    pub fn from_json(input: &str) -> Result<Memory> {
        Ok(Memory::with_data(hexcodec::deserialize(input)?))
    }

    /// Replaces the contents of the store with the decoded input. On error
    /// the store keeps its prior contents.
    pub fn load_json(&mut self, input: &str) -> Result<()> {
        let data = hexcodec::deserialize(input)?;
        debug!("loaded {} entries, replacing {}", data.len(), self.data.len());
        self.data = data;
        Ok(())
    }
}

impl From<HashMap<Vec<u8>, Vec<u8>>> for Memory {
    fn from(data: HashMap<Vec<u8>, Vec<u8>>) -> Self {
        Memory::with_data(data)
    }
}

impl MapStore for Memory {
    fn get(&self, key: &[u8]) -> Result<Vec<u8>> {
        self.data.get(key).cloned().ok_or_else(|| Error::InvalidKey(key.to_vec()))
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<()> {
        trace!("set {} ({} bytes)", hex::encode(key), value.len());
        self.data.insert(key.to_vec(), value);
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<()> {
        match self.data.remove(key) {
            Some(_) => {
                trace!("delete {}", hex::encode(key));
                Ok(())
            }
            None => Err(Error::InvalidKey(key.to_vec())),
        }
    }
}

impl Serialize for Memory {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(hexcodec::encode(&self.data))
    }
}

impl<'de> Deserialize<'de> for Memory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, String>::deserialize(deserializer)?;
        let data = hexcodec::decode(raw).map_err(<D::Error as serde::de::Error>::custom)?;
        Ok(Memory::with_data(data))
    }
}
