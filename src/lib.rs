//! Dummy downloader - a demo download source for music library hosts
//!
//! This library implements the host's downloader contract with hardcoded
//! artist, album and track metadata. Downloads write a few synthetic audio
//! bytes to disk instead of touching the network, which makes it useful for
//! exercising the host without credentials.

/// Downloader contract, entities and the dummy implementation
pub mod clients;
/// Plugin entry point used by the host
pub mod plugin;

pub use clients::{Downloader, DummyDownloader};
pub use plugin::{BuildInfo, PluginSettings, new_downloader};
