//! Node configuration data model and defaults.
//!
//! Every field has a hard-coded baseline, so a freshly constructed [`Config`]
//! is always fully populated; a TOML file only overrides the keys it names.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for one metadata node in the cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Maximum number of in-flight client proposals queued before
    /// backpressure applies (default: 1000)
    pub num_pending_proposals: usize,

    /// Emit per-proposal trace logging (default: false)
    pub tracing: bool,

    /// This node's own network address (default: "127.0.0.1:2347")
    pub my_addr: String,

    /// This node's cluster-unique replica identifier (default: 1)
    pub raft_id: u64,

    /// Remote replicas, in file order. Identifier uniqueness across the
    /// cluster (including `raft_id`) is the caller's contract.
    pub peers: Vec<Peer>,

    /// Tick duration in milliseconds driving the consensus logical clock
    /// (default: 20)
    pub tick_time_ms: u64,

    /// Ticks without a heartbeat before a follower calls an election
    /// (default: 100)
    pub election_tick: u32,

    /// Ticks between heartbeats sent by a leader (default: 1)
    pub heartbeat_tick: u32,

    /// Maximum serialized size in bytes of a single replication message
    /// (default: 4096)
    pub max_size_per_msg: u64,

    /// Maximum replication messages in flight to one peer before throttling
    /// (default: 256)
    pub max_inflight_msgs: usize,

    /// Directory where the write-ahead log is persisted (default: "./wal")
    pub wal_dir: PathBuf,

    /// Seconds between automatic snapshot creation (default: 60)
    #[serde(rename = "snapshot-interval")]
    pub snapshot_interval_secs: u64,

    /// Seconds between background checksum verification passes (default: 10)
    #[serde(rename = "checksum-interval")]
    pub checksum_interval_secs: u64,

    /// Create log retention directories automatically if absent
    /// (default: true)
    pub retention_auto_create: bool,
}

/// One remote replica's reachable address and identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Peer {
    pub addr: String,
    pub raft_id: u64,
}

/// Inclusive lower/upper bound pair of network addresses.
///
/// Declared as part of the model but not populated by any default or decode
/// path; reserved for access-control extensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpRange {
    pub lower: IpAddr,
    pub upper: IpAddr,
}

impl Config {
    /// Returns a configuration with every field at its documented baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick duration as a `Duration`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_time_ms)
    }

    /// Election timeout derived from the tick duration.
    pub fn election_timeout(&self) -> Duration {
        Duration::from_millis(self.tick_time_ms * u64::from(self.election_tick))
    }

    /// Heartbeat interval derived from the tick duration.
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_millis(self.tick_time_ms * u64::from(self.heartbeat_tick))
    }

    /// Snapshot creation interval as a `Duration`.
    pub fn snapshot_interval(&self) -> Duration {
        Duration::from_secs(self.snapshot_interval_secs)
    }

    /// Checksum verification interval as a `Duration`.
    pub fn checksum_interval(&self) -> Duration {
        Duration::from_secs(self.checksum_interval_secs)
    }

    /// Look up a peer by replica identifier.
    pub fn peer(&self, raft_id: u64) -> Option<&Peer> {
        self.peers.iter().find(|p| p.raft_id == raft_id)
    }

    /// All peer addresses, in configured order.
    pub fn peer_addrs(&self) -> Vec<&str> {
        self.peers.iter().map(|p| p.addr.as_str()).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_pending_proposals: default_num_pending_proposals(),
            tracing: false,
            my_addr: default_my_addr(),
            raft_id: 1,
            peers: default_peers(),
            tick_time_ms: default_tick_time_ms(),
            election_tick: default_election_tick(),
            heartbeat_tick: default_heartbeat_tick(),
            max_size_per_msg: default_max_size_per_msg(),
            max_inflight_msgs: default_max_inflight_msgs(),
            wal_dir: default_wal_dir(),
            snapshot_interval_secs: default_snapshot_interval_secs(),
            checksum_interval_secs: default_checksum_interval_secs(),
            retention_auto_create: true,
        }
    }
}

// Default value functions
fn default_num_pending_proposals() -> usize { 1000 }
fn default_my_addr() -> String { "127.0.0.1:2347".to_string() }
fn default_peers() -> Vec<Peer> {
    vec![
        Peer { addr: "127.0.0.1:2348".to_string(), raft_id: 2 },
        Peer { addr: "127.0.0.1:2349".to_string(), raft_id: 3 },
    ]
}
fn default_tick_time_ms() -> u64 { 20 }
fn default_election_tick() -> u32 { 100 }
fn default_heartbeat_tick() -> u32 { 1 }
fn default_max_size_per_msg() -> u64 { 4096 }
fn default_max_inflight_msgs() -> usize { 256 }
fn default_wal_dir() -> PathBuf { PathBuf::from("./wal") }
fn default_snapshot_interval_secs() -> u64 { 60 }
fn default_checksum_interval_secs() -> u64 { 10 }
