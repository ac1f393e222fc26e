use std::env::VarError;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dummy_downloader::clients::errors::{Error, Result};
use dummy_downloader::clients::{DownloaderCapabilities, DownloaderStatus, UserInfo};
use dummy_downloader::{BuildInfo, PluginSettings, new_downloader};
use log::{debug, info};
use serde::Serialize;

const VERSION_VAR: &str = "DUMMY_DOWNLOADER_VERSION";

#[derive(Parser)]
#[command(name = "dummy-downloader")]
#[command(version, about = "Drive the dummy downloader the way a host would", long_about = None)]
struct Cli {
    /// JSON file with plugin settings, passed to the downloader untouched
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Version shown in the status message (defaults to $DUMMY_DOWNLOADER_VERSION)
    #[arg(long, global = true)]
    plugin_version: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show name, capabilities, status, user info and search types
    Info {},
    /// Search albums (the query is accepted but has no effect)
    SearchAlbums {
        #[arg(default_value = "")]
        query: String,
        #[arg(long, default_value_t = 0)]
        limit: i64,
    },
    SearchTracks {
        #[arg(default_value = "")]
        query: String,
        #[arg(long, default_value_t = 0)]
        limit: i64,
    },
    AlbumTracks {
        album_id: String,
    },
    Chart {
        #[arg(long, default_value_t = 0)]
        limit: i64,
    },
    DownloadTrack {
        track_id: String,
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    DownloadAlbum {
        album_id: String,
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Download an album or track from a link such as https://host/album/42
    DownloadLink {
        url: String,
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    SearchLinks {
        query: String,
        #[arg(long, default_value_t = 0)]
        limit: i64,
    },
}

#[derive(Serialize)]
struct Info<'a> {
    name: &'a str,
    capabilities: DownloaderCapabilities,
    status: DownloaderStatus,
    user: UserInfo,
    search_types: Vec<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => PluginSettings::new(),
    };
    let build = BuildInfo {
        version: match cli.plugin_version {
            Some(version) => Some(version),
            None => version_from_env()?,
        },
    };
    let downloader = new_downloader(&settings, &build)?;

    let mut log_progress = |done: u64, total: u64| info!("Progress: {done}/{total}");

    match cli.command {
        Commands::Info {} => print_json(&Info {
            name: downloader.name(),
            capabilities: downloader.capabilities(),
            status: downloader.status(),
            user: downloader.user_info(),
            search_types: downloader.supported_search_types(),
        }),
        Commands::SearchAlbums { query, limit } => {
            print_json(&downloader.search_albums(&query, limit)?)
        }
        Commands::SearchTracks { query, limit } => {
            print_json(&downloader.search_tracks(&query, limit)?)
        }
        Commands::AlbumTracks { album_id } => print_json(&downloader.album_tracks(&album_id)?),
        Commands::Chart { limit } => print_json(&downloader.chart_tracks(limit)?),
        Commands::DownloadTrack { track_id, dir } => {
            let dir = download_dir(dir);
            print_json(&downloader.download_track(&track_id, &dir, Some(&mut log_progress))?)
        }
        Commands::DownloadAlbum { album_id, dir } => {
            let dir = download_dir(dir);
            print_json(&downloader.download_album(&album_id, &dir, Some(&mut log_progress))?)
        }
        Commands::DownloadLink { url, dir } => {
            let dir = download_dir(dir);
            print_json(&downloader.download_link(&url, &dir, Some(&mut log_progress))?)
        }
        Commands::SearchLinks { query, limit } => {
            print_json(&downloader.search_links(&query, limit)?)
        }
    }
}

fn load_settings(path: &Path) -> Result<PluginSettings> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::ConfigurationError(format!("cannot read {path:?}: {e}")))?;
    let settings: PluginSettings = serde_json::from_str(&raw)?;
    debug!("Loaded {} setting(s) from {path:?}", settings.len());
    Ok(settings)
}

fn version_from_env() -> Result<Option<String>> {
    match std::env::var(VERSION_VAR) {
        Ok(version) => Ok(Some(version)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// Falls back to the user's download directory, then /tmp
fn download_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
