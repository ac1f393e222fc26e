use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to write dummy audio file for track {track_id}: {source}")]
    AudioWriteError {
        track_id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported URL format for dummy downloader")]
    UnsupportedUrlError(String),

    #[error("{0} not supported for Dummy")]
    NotSupportedError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to parse settings, error: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}
