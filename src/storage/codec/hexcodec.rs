//! Hexcodec is a text-safe encoding for byte-keyed maps. Keys and values are
//! arbitrary byte strings, which are neither valid UTF-8 nor safe to embed in
//! JSON in general, so every key and value is written as a lowercase hex
//! string and the map becomes a JSON object of string to string, e.g.
//!
//! ```text
//! {"00": "ff", "01": "ab"}
//! ```
//!
//! Entries are emitted sorted by encoded key, which keeps the output stable
//! for the same contents regardless of the backing map's iteration order.
//!
//! Decoding accepts upper- or lower-case hex digits. Two strings that decode
//! to the same bytes (e.g. `"0a"` and `"0A"`) are rejected.
use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::error::{Error, Result};

pub fn encode<'a, I>(entries: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (&'a Vec<u8>, &'a Vec<u8>)>,
{
    entries.into_iter().map(|(k, v)| (hex::encode(k), hex::encode(v))).collect()
}

/// Hex-decodes every key and value into a fresh map. Nothing is returned
/// unless every entry decodes.
pub fn decode<I>(entries: I) -> Result<HashMap<Vec<u8>, Vec<u8>>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut data = HashMap::new();
    for (k, v) in entries {
        let key = hex::decode(&k).map_err(|e| hex_error("key", &k, e))?;
        let value = hex::decode(&v).map_err(|e| hex_error("value", &v, e))?;
        if data.insert(key, value).is_some() {
            return Err(Error::Decode(format!("duplicate key {:?}", k)));
        }
    }
    Ok(data)
}

pub fn serialize(data: &HashMap<Vec<u8>, Vec<u8>>) -> Result<String> {
    let res = serde_json::to_string(&encode(data))?;
    Ok(res)
}

pub fn deserialize(input: &str) -> Result<HashMap<Vec<u8>, Vec<u8>>> {
    let raw: HashMap<String, String> = serde_json::from_str(input).map_err(|e| {
        debug!("malformed store document: {}", e);
        Error::from(e)
    })?;
    decode(raw)
}

fn hex_error(what: &str, s: &str, err: hex::FromHexError) -> Error {
    debug!("invalid hex {} {:?}: {}", what, s, err);
    Error::HexDecode(format!("{} {:?}: {}", what, s, err))
}
