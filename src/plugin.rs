use log::debug;
use serde_json::{Map, Value};

use crate::clients::{Downloader, DummyDownloader, errors::Result};

/// Settings map handed over by the host when it loads the plugin.
pub type PluginSettings = Map<String, Value>;

/// Build information fixed once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: Option<String>,
}

impl BuildInfo {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
        }
    }
}

/// Plugin entry point: returns a ready downloader.
///
/// The settings are accepted as-is; the demo downloader has nothing to configure.
pub fn new_downloader(
    settings: &PluginSettings,
    build: &BuildInfo,
) -> Result<Box<dyn Downloader>> {
    debug!("Creating dummy downloader, ignoring {} setting(s)", settings.len());
    let mut builder = DummyDownloader::builder();
    if let Some(version) = &build.version {
        builder = builder.version(version.as_str());
    }
    Ok(Box::new(builder.build()))
}
