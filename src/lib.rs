//! Configuration for a Raft-replicated metadata node.
//!
//! This crate provides:
//! - The tunable-parameter data model with documented defaults
//! - TOML file loading with byte-order-mark normalization
//! - Overlay decoding that only overwrites keys present in the file
//!
//! A [`Config`] is built once at startup and treated as immutable afterwards:
//!
//! ```no_run
//! use raftmeta_config::Config;
//!
//! let mut config = Config::new();
//! config.load_toml_file("raftmeta.toml")?;
//! # Ok::<(), raftmeta_config::ConfigError>(())
//! ```

pub mod config;
pub mod encoding;
pub mod load;

pub use config::{Config, IpRange, Peer};
pub use encoding::TranscodeError;
pub use load::LoadOptions;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transcode error: {0}")]
    Transcode(#[from] TranscodeError),

    #[error("Decode error: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("Unrecognized configuration key: {0}")]
    UnknownKey(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
