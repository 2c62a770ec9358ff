use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("failed to create download directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    Cancelled,
}

/// Somewhere exported bytes can be handed off to, named by a suggested file name.
pub trait Downloader: Send + Sync {
    fn deliver(&self, suggested_name: &str, contents: &[u8])
        -> Result<DownloadOutcome, DownloadError>;
}
