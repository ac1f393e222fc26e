use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, info};

use crate::clients::{
    Downloader, DownloaderCapabilities, DownloaderStatus, ProgressCallback, UserInfo,
    entities::{Album, AlbumType, Artist, ArtistRole, Metadata, Track},
    errors::{Error, Result},
    link::{LinkTarget, parse_link},
};

const NAME: &str = "Dummy";
const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 50;
const TRACKS_PER_ALBUM: u32 = 10;
const TRACK_PROGRESS_TOTAL: u64 = 1_000;
const ALBUM_PROGRESS_TOTAL: u64 = 10_000;
const PROGRESS_STEPS: u64 = 10;
const ALBUM_IMAGES: [&str; 1] = ["/img/album_demo.jpg"];

/// A minimal MP3 frame header followed by an ID3v2.3 `TIT2` fragment.
/// Not decodable audio, only enough bytes to look like a file.
pub const DUMMY_AUDIO: [u8; 47] = [
    0xFF, 0xFB, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x49, 0x44, 0x33, 0x03, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x54, 0x49, 0x54, 0x32, 0x00, 0x00, //
    0x00, 0x0A, 0x00, 0x00, 0x00, 0x44, 0x65, 0x6D, //
    0x6F, 0x20, 0x54, 0x72, 0x61, 0x63, 0x6B,
];

/// Downloader serving hardcoded metadata and writing synthetic audio files.
///
/// Every call is independent; the only configuration is the build version
/// shown in [`Downloader::status`].
#[derive(Debug, Clone, Default)]
pub struct DummyDownloader {
    version: Option<String>,
}

pub struct DummyDownloaderBuilder {
    version: Option<String>,
}

impl DummyDownloaderBuilder {
    pub fn new() -> Self {
        Self { version: None }
    }

    /// Version appended to the status message. Empty strings are ignored.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.version = (!version.is_empty()).then_some(version);
        self
    }

    pub fn build(self) -> DummyDownloader {
        DummyDownloader {
            version: self.version,
        }
    }
}

impl Default for DummyDownloaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> DummyDownloaderBuilder {
        DummyDownloaderBuilder::new()
    }

    // Writes the synthetic audio for `track` into `download_dir` and records the path
    fn persist(track: &mut Track, download_dir: &Path) -> Result<()> {
        let path = track_path(download_dir, &track.id);
        std::fs::write(&path, DUMMY_AUDIO).map_err(|source| Error::AudioWriteError {
            track_id: track.id.clone(),
            source,
        })?;
        debug!("Wrote dummy audio for {} to {path:?}", track.id);
        track.path = Some(path);
        Ok(())
    }
}

impl Downloader for DummyDownloader {
    fn name(&self) -> &str {
        NAME
    }

    fn capabilities(&self) -> DownloaderCapabilities {
        DownloaderCapabilities {
            supports_search: true,
            supports_direct_links: true,
            supports_chart_tracks: true,
        }
    }

    fn user_info(&self) -> UserInfo {
        let user_options = ["lossless", "hq", "streaming", "offline"]
            .into_iter()
            .map(|flag| (flag.to_string(), true))
            .collect::<BTreeMap<_, _>>();
        UserInfo {
            id: 12345,
            name: "Demo User".into(),
            link: "https://example.com/user/demo".into(),
            picture: "/img/user_demo.jpg".into(),
            picture_small: "/img/user_demo.jpg".into(),
            country: "AR".into(),
            tracklist: "https://example.com/user/demo/tracks".into(),
            user_type: "user".into(),
            user_options,
        }
    }

    fn search_albums(&self, query: &str, limit: i64) -> Result<Vec<Album>> {
        let limit = effective_limit(limit);
        debug!("Searching {limit} dummy albums for {query:?}");
        let albums = (0..limit)
            .map(|i| {
                let mut album = dummy_album();
                album.id = format!("dummy-album-{}", i + 1);
                album.title = format!("Demo Album {}", i + 1);
                album.set_images(ALBUM_IMAGES[i % ALBUM_IMAGES.len()]);
                album
            })
            .collect();
        Ok(albums)
    }

    fn search_tracks(&self, query: &str, limit: i64) -> Result<Vec<Track>> {
        let limit = effective_limit(limit);
        debug!("Searching {limit} dummy tracks for {query:?}");
        let tracks = (1..=limit)
            .map(|n| {
                let mut track = dummy_track();
                track.id = format!("dummy-track-{n}");
                track.title = format!("Demo Track {n}");
                track
            })
            .collect();
        Ok(tracks)
    }

    fn album_tracks(&self, album_id: &str) -> Result<Vec<Track>> {
        Ok((1..=TRACKS_PER_ALBUM)
            .map(|n| album_track(album_id, n))
            .collect())
    }

    fn chart_tracks(&self, limit: i64) -> Result<Vec<Track>> {
        let limit = effective_limit(limit);
        let tracks = (1..=limit)
            .map(|n| {
                let mut track = dummy_track();
                track.id = format!("chart-track-{n}");
                track.title = format!("Chart Track {n}");
                track
            })
            .collect();
        Ok(tracks)
    }

    fn download_track(
        &self,
        track_id: &str,
        download_dir: &Path,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Track> {
        let mut track = dummy_track();
        track.id = track_id.to_string();
        Self::persist(&mut track, download_dir)?;

        simulate_progress(progress, TRACK_PROGRESS_TOTAL);
        info!("Downloaded dummy track {track_id}");
        Ok(track)
    }

    fn download_album(
        &self,
        album_id: &str,
        download_dir: &Path,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Vec<Track>> {
        let mut tracks = Vec::with_capacity(TRACKS_PER_ALBUM as usize);
        for n in 1..=TRACKS_PER_ALBUM {
            let mut track = album_track(album_id, n);
            Self::persist(&mut track, download_dir)?;
            tracks.push(track);
        }

        simulate_progress(progress, ALBUM_PROGRESS_TOTAL);
        info!("Downloaded dummy album {album_id} ({} tracks)", tracks.len());
        Ok(tracks)
    }

    fn download_link(
        &self,
        url: &str,
        download_dir: &Path,
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Vec<Track>> {
        match parse_link(url) {
            Some(LinkTarget::Album(album_id)) => {
                debug!("Link {url} resolved to album {album_id}");
                self.download_album(&album_id, download_dir, progress)
            }
            Some(LinkTarget::Track(track_id)) => {
                debug!("Link {url} resolved to track {track_id}");
                let track = self.download_track(&track_id, download_dir, progress)?;
                Ok(vec![track])
            }
            None => {
                debug!("No album or track id found in {url}");
                Err(Error::UnsupportedUrlError(url.to_string()))
            }
        }
    }

    fn status(&self) -> DownloaderStatus {
        let message = match &self.version {
            Some(version) => format!("Demo mode active (v{version})"),
            None => "Demo mode active".to_string(),
        };
        DownloaderStatus {
            name: "dummy".into(),
            status: "valid".into(),
            message,
        }
    }

    fn supported_search_types(&self) -> Vec<String> {
        vec!["tracks".to_string()]
    }

    fn search_links(&self, _query: &str, _limit: i64) -> Result<Vec<Album>> {
        Err(Error::NotSupportedError("link search".into()))
    }
}

/// Resolves the number of results to return: non-positive limits fall back
/// to the default and large ones are capped.
pub fn effective_limit(limit: i64) -> usize {
    if limit <= 0 {
        return DEFAULT_LIMIT;
    }
    usize::try_from(limit).map_or(MAX_LIMIT, |limit| limit.min(MAX_LIMIT))
}

fn track_path(download_dir: &Path, track_id: &str) -> PathBuf {
    download_dir.join(format!("{track_id}.mp3"))
}

// Reports `PROGRESS_STEPS + 1` evenly spaced points from zero to `total`
fn simulate_progress(progress: Option<ProgressCallback<'_>>, total: u64) {
    if let Some(callback) = progress {
        for step in 0..=PROGRESS_STEPS {
            callback(step * total / PROGRESS_STEPS, total);
        }
    }
}

fn dummy_artist() -> Artist {
    Artist {
        id: "dummy-artist-1".into(),
        name: "Demo Artist".into(),
        image_small: "/img/artist.svg".into(),
        image_medium: "/img/artist.svg".into(),
        image_large: "/img/artist.svg".into(),
        image_xl: "/img/artist.svg".into(),
    }
}

fn main_artist() -> Vec<ArtistRole> {
    vec![ArtistRole {
        artist: dummy_artist(),
        role: "main".into(),
    }]
}

fn dummy_album() -> Album {
    let mut album = Album {
        id: "dummy-album-1".into(),
        title: "Demo Album".into(),
        album_type: AlbumType::default(),
        artists: main_artist(),
        release_date: NaiveDate::from_ymd_opt(2023, 1, 1),
        genre: "Pop".into(),
        image_small: String::new(),
        image_medium: String::new(),
        image_large: String::new(),
        image_xl: String::new(),
        tracks: Vec::new(),
    };
    album.set_images(ALBUM_IMAGES[0]);
    album
}

fn dummy_track() -> Track {
    Track {
        id: "dummy-track-1".into(),
        title: "Demo Track".into(),
        artists: main_artist(),
        album: Some(dummy_album()),
        isrc: "US1234567890".into(),
        preview_url: "https://example.com/preview.mp3".into(),
        metadata: Metadata {
            duration: 180,
            track_number: 1,
            disc_number: 1,
            year: 2023,
            genre: "Pop".into(),
            original_year: 2023,
            explicit_lyrics: false,
            bpm: 120.0,
        },
        bitrate: 320,
        format: "mp3".into(),
        sample_rate: 44_100,
        bit_depth: 16,
        channels: 2,
        explicit_content: false,
        path: None,
    }
}

fn album_track(album_id: &str, number: u32) -> Track {
    let mut track = dummy_track();
    track.id = format!("{album_id}-track-{number}");
    track.title = format!("Track {number}");
    track.metadata.track_number = number;
    track
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped() {
        assert_eq!(effective_limit(i64::MIN), 10);
        assert_eq!(effective_limit(-1), 10);
        assert_eq!(effective_limit(0), 10);
        assert_eq!(effective_limit(1), 1);
        assert_eq!(effective_limit(37), 37);
        assert_eq!(effective_limit(50), 50);
        assert_eq!(effective_limit(51), 50);
        assert_eq!(effective_limit(i64::MAX), 50);
    }

    #[test]
    fn searches_apply_clamping() {
        let d = DummyDownloader::new();
        assert_eq!(d.search_albums("anything", 0).unwrap().len(), 10);
        assert_eq!(d.search_tracks("anything", 200).unwrap().len(), 50);
        assert_eq!(d.chart_tracks(-5).unwrap().len(), 10);
        assert_eq!(d.chart_tracks(3).unwrap().len(), 3);
    }

    #[test]
    fn search_results_are_sequential() {
        let d = DummyDownloader::new();
        let albums = d.search_albums("", 3).unwrap();
        let ids: Vec<_> = albums.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["dummy-album-1", "dummy-album-2", "dummy-album-3"]);
        assert_eq!(albums[2].title, "Demo Album 3");
        assert!(albums.iter().all(|a| a.image_xl == "/img/album_demo.jpg"));

        let tracks = d.search_tracks("", 2).unwrap();
        assert_eq!(tracks[1].id, "dummy-track-2");
        assert_eq!(tracks[1].title, "Demo Track 2");
    }

    #[test]
    fn query_is_ignored() {
        let d = DummyDownloader::new();
        assert_eq!(
            d.search_tracks("foo", 5).unwrap(),
            d.search_tracks("bar", 5).unwrap()
        );
    }

    #[test]
    fn album_tracks_are_numbered() {
        let tracks = DummyDownloader::new().album_tracks("X").unwrap();
        assert_eq!(tracks.len(), 10);
        for (i, track) in tracks.iter().enumerate() {
            assert_eq!(track.id, format!("X-track-{}", i + 1));
            assert_eq!(track.title, format!("Track {}", i + 1));
            assert_eq!(track.metadata.track_number as usize, i + 1);
            assert!(track.path.is_none());
        }
    }

    #[test]
    fn chart_tracks_prefix() {
        let tracks = DummyDownloader::new().chart_tracks(2).unwrap();
        assert_eq!(tracks[0].id, "chart-track-1");
        assert_eq!(tracks[1].title, "Chart Track 2");
    }

    #[test]
    fn track_template() {
        let track = dummy_track();
        assert_eq!(track.isrc, "US1234567890");
        assert_eq!(track.metadata.duration, 180);
        assert_eq!(track.artists[0].role, "main");
        let album = track.album.unwrap();
        assert_eq!(album.release_date, NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(album.artists[0].artist.name, "Demo Artist");
    }

    #[test]
    fn progress_steps() {
        let mut seen = vec![];
        let mut record = |done: u64, total: u64| seen.push((done, total));
        simulate_progress(Some(&mut record), 1_000);
        let expected: Vec<_> = (0..=10).map(|i| (i * 100, 1_000)).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn status_message() {
        assert_eq!(DummyDownloader::new().status().message, "Demo mode active");
        let d = DummyDownloader::builder().version("1.4.2").build();
        let status = d.status();
        assert_eq!(status.name, "dummy");
        assert_eq!(status.status, "valid");
        assert_eq!(status.message, "Demo mode active (v1.4.2)");
        let d = DummyDownloader::builder().version("").build();
        assert_eq!(d.status().message, "Demo mode active");
    }

    #[test]
    fn fixed_descriptors() {
        let d = DummyDownloader::new();
        assert_eq!(d.name(), "Dummy");
        assert_eq!(d.supported_search_types(), ["tracks"]);
        let caps = d.capabilities();
        assert!(caps.supports_search && caps.supports_direct_links && caps.supports_chart_tracks);
        let user = d.user_info();
        assert_eq!(user.id, 12345);
        assert_eq!(user.country, "AR");
        assert_eq!(user.user_options.len(), 4);
        assert!(user.user_options.values().all(|enabled| *enabled));
    }

    #[test]
    fn link_search_is_unsupported() {
        let d = DummyDownloader::new();
        for (query, limit) in [("", 0), ("beatles", 10), ("x", -3)] {
            let err = d.search_links(query, limit).unwrap_err();
            assert!(matches!(err, Error::NotSupportedError(_)));
            assert_eq!(err.to_string(), "link search not supported for Dummy");
        }
    }
}
