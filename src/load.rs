//! TOML loading pipeline: file read, encoding normalization, overlay decode.
//!
//! Decoding overwrites exactly the fields whose keys appear in the text;
//! absent keys keep the receiver's current value. A decode failure leaves the
//! receiver unspecified and callers must discard it.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{Config, Peer};
use crate::encoding;
use crate::{ConfigError, Result};

/// Keys recognized at the document top level.
const CONFIG_KEYS: &[&str] = &[
    "num-pending-proposals",
    "tracing",
    "my-addr",
    "raft-id",
    "peers",
    "tick-time-ms",
    "election-tick",
    "heartbeat-tick",
    "max-size-per-msg",
    "max-inflight-msgs",
    "wal-dir",
    "snapshot-interval",
    "checksum-interval",
    "retention-auto-create",
];

/// Keys recognized inside a `[[peers]]` entry.
const PEER_KEYS: &[&str] = &["addr", "raft-id"];

/// Options for the decode step.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Reject keys that do not map to any configuration field.
    ///
    /// Off by default; strict mode catches typos in operator-authored
    /// cluster configs.
    pub deny_unknown_keys: bool,
}

/// The decoded form of a configuration document: one `Option` per recognized
/// key, applied onto the receiver field-by-field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ConfigOverlay {
    num_pending_proposals: Option<usize>,
    tracing: Option<bool>,
    my_addr: Option<String>,
    raft_id: Option<u64>,
    peers: Option<Vec<Peer>>,
    tick_time_ms: Option<u64>,
    election_tick: Option<u32>,
    heartbeat_tick: Option<u32>,
    max_size_per_msg: Option<u64>,
    max_inflight_msgs: Option<usize>,
    wal_dir: Option<PathBuf>,
    #[serde(rename = "snapshot-interval")]
    snapshot_interval_secs: Option<u64>,
    #[serde(rename = "checksum-interval")]
    checksum_interval_secs: Option<u64>,
    retention_auto_create: Option<bool>,
}

impl ConfigOverlay {
    fn apply(self, config: &mut Config) {
        if let Some(v) = self.num_pending_proposals {
            config.num_pending_proposals = v;
        }
        if let Some(v) = self.tracing {
            config.tracing = v;
        }
        if let Some(v) = self.my_addr {
            config.my_addr = v;
        }
        if let Some(v) = self.raft_id {
            config.raft_id = v;
        }
        // A present peers array replaces the whole list; entries are never
        // merged one-by-one.
        if let Some(v) = self.peers {
            config.peers = v;
        }
        if let Some(v) = self.tick_time_ms {
            config.tick_time_ms = v;
        }
        if let Some(v) = self.election_tick {
            config.election_tick = v;
        }
        if let Some(v) = self.heartbeat_tick {
            config.heartbeat_tick = v;
        }
        if let Some(v) = self.max_size_per_msg {
            config.max_size_per_msg = v;
        }
        if let Some(v) = self.max_inflight_msgs {
            config.max_inflight_msgs = v;
        }
        if let Some(v) = self.wal_dir {
            config.wal_dir = v;
        }
        if let Some(v) = self.snapshot_interval_secs {
            config.snapshot_interval_secs = v;
        }
        if let Some(v) = self.checksum_interval_secs {
            config.checksum_interval_secs = v;
        }
        if let Some(v) = self.retention_auto_create {
            config.retention_auto_create = v;
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file, normalizing any byte-order mark
    /// before decoding. The first failing step short-circuits the rest.
    pub fn load_toml_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let text = encoding::normalize(&bytes)?;
        self.load_toml(&text)?;
        info!("Loaded configuration from {:?}", path);
        Ok(())
    }

    /// Decodes TOML text onto this configuration, ignoring unknown keys.
    pub fn load_toml(&mut self, text: &str) -> Result<()> {
        self.load_toml_with(text, LoadOptions::default())
    }

    /// Decodes TOML text onto this configuration with explicit options.
    pub fn load_toml_with(&mut self, text: &str, opts: LoadOptions) -> Result<()> {
        let table: toml::Table = text.parse()?;
        if opts.deny_unknown_keys {
            reject_unknown_keys(&table)?;
        }
        let overlay: ConfigOverlay = toml::Value::Table(table).try_into()?;
        overlay.apply(self);
        Ok(())
    }
}

fn reject_unknown_keys(table: &toml::Table) -> Result<()> {
    for (key, value) in table {
        if !CONFIG_KEYS.contains(&key.as_str()) {
            return Err(ConfigError::UnknownKey(key.clone()));
        }
        if key == "peers" {
            if let toml::Value::Array(entries) = value {
                for entry in entries {
                    // Non-table entries are left for the decoder to report.
                    if let toml::Value::Table(peer) = entry {
                        for peer_key in peer.keys() {
                            if !PEER_KEYS.contains(&peer_key.as_str()) {
                                return Err(ConfigError::UnknownKey(format!(
                                    "peers.{peer_key}"
                                )));
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(())
}
