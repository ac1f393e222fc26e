use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub image_small: String,
    pub image_medium: String,
    pub image_large: String,
    pub image_xl: String,
}

/// An artist credited on an album or track, e.g. `main` or `featured`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRole {
    pub artist: Artist,
    pub role: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumType {
    #[default]
    Album,
    Single,
    Ep,
    Compilation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub album_type: AlbumType,
    pub artists: Vec<ArtistRole>,
    pub release_date: Option<NaiveDate>,
    pub genre: String,
    pub image_small: String,
    pub image_medium: String,
    pub image_large: String,
    pub image_xl: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<Track>,
}

impl Album {
    /// Points every image size at the same URL.
    pub fn set_images(&mut self, url: &str) {
        self.image_small = url.to_string();
        self.image_medium = url.to_string();
        self.image_large = url.to_string();
        self.image_xl = url.to_string();
    }
}

/// Tag-level metadata embedded in a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Duration in seconds.
    pub duration: u32,
    pub track_number: u32,
    pub disc_number: u32,
    pub year: i32,
    pub genre: String,
    pub original_year: i32,
    pub explicit_lyrics: bool,
    pub bpm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artists: Vec<ArtistRole>,
    pub album: Option<Album>,
    pub isrc: String,
    pub preview_url: String,
    pub metadata: Metadata,
    /// Bitrate in kbps.
    pub bitrate: u32,
    pub format: String,
    pub sample_rate: u32,
    pub bit_depth: u16,
    pub channels: u16,
    pub explicit_content: bool,
    /// Location of the audio file once the track has been downloaded.
    pub path: Option<PathBuf>,
}
