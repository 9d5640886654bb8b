//! End-to-end configuration loading over real files.

use raftmeta_config::{Config, ConfigError};
use std::fs;

const SAMPLE: &str = r#"
num-pending-proposals = 250
tracing = true
my-addr = "192.168.0.10:2347"
raft-id = 4

[[peers]]
addr = "192.168.0.11:2347"
raft-id = 5

[[peers]]
addr = "192.168.0.12:2347"
raft-id = 6
"#;

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raftmeta.toml");
    fs::write(&path, SAMPLE).unwrap();

    let mut config = Config::new();
    config.load_toml_file(&path).unwrap();

    assert_eq!(config.num_pending_proposals, 250);
    assert!(config.tracing);
    assert_eq!(config.my_addr, "192.168.0.10:2347");
    assert_eq!(config.raft_id, 4);
    assert_eq!(config.peers.len(), 2);
    assert_eq!(config.peers[0].raft_id, 5);
    assert_eq!(config.peers[1].raft_id, 6);
    // Keys absent from the file keep their defaults.
    assert_eq!(config.tick_time_ms, 20);
    assert_eq!(config.wal_dir, std::path::PathBuf::from("./wal"));
}

#[test]
fn test_load_utf8_bom_file_matches_plain_file() {
    let dir = tempfile::tempdir().unwrap();

    let plain_path = dir.path().join("plain.toml");
    fs::write(&plain_path, SAMPLE).unwrap();

    let bom_path = dir.path().join("bom.toml");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(SAMPLE.as_bytes());
    fs::write(&bom_path, bytes).unwrap();

    let mut plain = Config::new();
    plain.load_toml_file(&plain_path).unwrap();
    let mut bom = Config::new();
    bom.load_toml_file(&bom_path).unwrap();

    assert_eq!(plain, bom);
}

#[test]
fn test_load_utf16_le_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("utf16.toml");

    let mut bytes = vec![0xFF, 0xFE];
    for unit in SAMPLE.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&path, bytes).unwrap();

    let mut config = Config::new();
    config.load_toml_file(&path).unwrap();
    assert_eq!(config.raft_id, 4);
    assert_eq!(config.peers.len(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let mut config = Config::new();
    let err = config.load_toml_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_truncated_utf16_file_is_transcode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.toml");

    let mut bytes = vec![0xFF, 0xFE];
    bytes.push(0x41); // half a code unit
    fs::write(&path, bytes).unwrap();

    let mut config = Config::new();
    let err = config.load_toml_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Transcode(_)));
}

#[test]
fn test_malformed_file_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[[peers\n").unwrap();

    let mut config = Config::new();
    let err = config.load_toml_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Decode(_)));
}
