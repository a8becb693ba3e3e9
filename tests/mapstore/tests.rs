use std::collections::HashMap;

use log::info;
use mapstore::error::Error;
use mapstore::error::Result;
use mapstore::storage::memory::Memory;
use mapstore::storage::MapStore;

fn sample_keys() -> Vec<Vec<u8>> {
    vec![
        vec![],
        vec![0x00],
        vec![0xff],
        vec![0x00, 0x00],
        b"apple".to_vec(),
        b"app".to_vec(),
        b"{\"json\": true}".to_vec(),
        (0..=255).collect(),
    ]
}

#[test]
fn test_missing_keys() -> Result<()> {
    setup!(store);

    for key in sample_keys() {
        let err = store.get(&key).unwrap_err();
        assert_eq!(Some(key.as_slice()), err.key());

        // a failed delete must not create or alter anything
        assert_eq!(Err(Error::InvalidKey(key.clone())), store.delete(&key));
        assert!(!store.contains(&key)?);
    }
    Ok(())
}

#[test]
fn test_set_get_overwrite_delete() -> Result<()> {
    setup!(store);

    for (i, key) in sample_keys().into_iter().enumerate() {
        info!("key {}: {:?}", i, key);
        let v1 = vec![i as u8; i];
        let v2 = vec![0xff - i as u8; i + 1];

        store.set(&key, v1.clone())?;
        assert_eq!(v1, store.get(&key)?);

        store.set(&key, v2.clone())?;
        assert_eq!(v2, store.get(&key)?);
    }

    // every key is still present, deleting each leaves the others alone
    let keys = sample_keys();
    for (i, key) in keys.iter().enumerate() {
        store.delete(key)?;
        assert!(store.get(key).unwrap_err().is_invalid_key());
        for rest in &keys[i + 1..] {
            assert!(store.contains(rest)?);
        }
    }
    Ok(())
}

#[test]
fn test_json_roundtrip() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut data = HashMap::new();
    for (i, key) in sample_keys().into_iter().enumerate() {
        data.insert(key, (0..i as u8).rev().collect::<Vec<u8>>());
    }
    let expected = data.clone();
    let store = Memory::with_data(data);

    let json = store.to_json()?;
    assert!(json.is_ascii());
    let decoded = Memory::from_json(&json)?;
    assert_eq!(expected, decoded.into_inner());

    // encoding the decoded store again is byte for byte identical
    let mut reloaded = Memory::new();
    reloaded.set(b"stale", vec![1])?;
    reloaded.load_json(&json)?;
    assert_eq!(json, reloaded.to_json()?);
    Ok(())
}

#[test]
fn test_decode_rejects_bad_input() -> Result<()> {
    let mut store = Memory::new();
    store.set(&[0x00], vec![0xff])?;
    let before = store.clone();

    let bad_hex = [
        r#"{"00": "ff", "0g": "00"}"#,
        r#"{"00": "ff", "01": "abc"}"#,
        r#"{"00 ": "ff"}"#,
    ];
    for input in bad_hex {
        assert!(matches!(store.load_json(input), Err(Error::HexDecode(_))), "{}", input);
        assert!(matches!(Memory::from_json(input), Err(Error::HexDecode(_))), "{}", input);
        assert_eq!(before, store);
    }

    let bad_json = ["", "null", "[\"00\", \"ff\"]", r#"{"00": ["ff"]}"#, r#"{"00": "ff","#];
    for input in bad_json {
        assert!(matches!(store.load_json(input), Err(Error::Decode(_))), "{}", input);
        assert_eq!(before, store);
    }
    Ok(())
}

#[test]
fn test_embedded_in_document() -> Result<()> {
    let mut store = Memory::new();
    store.set(&[0x00], vec![0xff])?;
    store.set(&[0x01], vec![0xab])?;

    let doc = serde_json::json!({ "version": 1, "store": store });
    assert_eq!(r#"{"store":{"00":"ff","01":"ab"},"version":1}"#, doc.to_string());

    let decoded: Memory = serde_json::from_value(doc["store"].clone())?;
    assert_eq!(store, decoded);
    Ok(())
}
