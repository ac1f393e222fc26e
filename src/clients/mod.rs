use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Hardcoded demo downloader
pub mod dummy;
/// Music data entities: artists, albums and tracks
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Direct link parsing
pub mod link;

pub use dummy::DummyDownloader;
pub use entities::{Album, AlbumType, Artist, ArtistRole, Metadata, Track};
pub use errors::{Error, Result};

/// Receives `(downloaded, total)` pairs while a download is in progress.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(u64, u64);

/// Features a downloader advertises to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloaderCapabilities {
    pub supports_search: bool,
    pub supports_direct_links: bool,
    pub supports_chart_tracks: bool,
}

/// Health of a downloader as shown by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloaderStatus {
    pub name: String,
    pub status: String,
    pub message: String,
}

/// Account the downloader is logged in as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u64,
    pub name: String,
    pub link: String,
    pub picture: String,
    pub picture_small: String,
    pub country: String,
    pub tracklist: String,
    #[serde(rename = "type")]
    pub user_type: String,
    /// Named feature flags such as `lossless` or `streaming`.
    pub user_options: BTreeMap<String, bool>,
}

/// Contract every download source must satisfy to be loaded by the host.
///
/// Search and listing calls take a `limit` as supplied by the host; out of
/// range values are clamped by the implementation rather than rejected.
pub trait Downloader: Send + Sync {
    fn name(&self) -> &str;

    fn capabilities(&self) -> DownloaderCapabilities;

    fn user_info(&self) -> UserInfo;

    fn search_albums(&self, query: &str, limit: i64) -> Result<Vec<Album>>;

    fn search_tracks(&self, query: &str, limit: i64) -> Result<Vec<Track>>;

    fn album_tracks(&self, album_id: &str) -> Result<Vec<Track>>;

    fn chart_tracks(&self, limit: i64) -> Result<Vec<Track>>;

    /// Downloads a single track into `download_dir`.
    fn download_track(
        &self,
        track_id: &str,
        download_dir: &Path,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Track>;

    /// Downloads every track of an album into `download_dir`.
    fn download_album(
        &self,
        album_id: &str,
        download_dir: &Path,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Vec<Track>>;

    /// Resolves a direct album or track link and downloads it.
    fn download_link(
        &self,
        url: &str,
        download_dir: &Path,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Vec<Track>>;

    fn status(&self) -> DownloaderStatus;

    /// Search categories the host may offer for this downloader.
    fn supported_search_types(&self) -> Vec<String>;

    fn search_links(&self, query: &str, limit: i64) -> Result<Vec<Album>>;
}
