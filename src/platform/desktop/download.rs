use std::path::{Path, PathBuf};

use rfd::FileDialog;

use crate::usecase::ports::download::{DownloadError, DownloadOutcome, Downloader};

/// Writes straight into a directory, the way a browser drops files into Downloads.
pub struct DownloadsFolder {
    dir: PathBuf,
}

impl DownloadsFolder {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl Downloader for DownloadsFolder {
    fn deliver(
        &self,
        suggested_name: &str,
        contents: &[u8],
    ) -> Result<DownloadOutcome, DownloadError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| DownloadError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        let path = unique_destination(&self.dir, suggested_name);
        write_file(&path, contents)?;
        Ok(DownloadOutcome::Saved(path))
    }
}

/// Asks for a destination with a native save dialog pre-filled with the suggested name.
pub struct SaveDialog {
    start_dir: PathBuf,
}

impl SaveDialog {
    pub fn new(start_dir: PathBuf) -> Self {
        Self { start_dir }
    }
}

impl Downloader for SaveDialog {
    fn deliver(
        &self,
        suggested_name: &str,
        contents: &[u8],
    ) -> Result<DownloadOutcome, DownloadError> {
        let Some(path) = FileDialog::new()
            .set_directory(&self.start_dir)
            .set_file_name(suggested_name)
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return Ok(DownloadOutcome::Cancelled);
        };
        write_file(&path, contents)?;
        Ok(DownloadOutcome::Saved(path))
    }
}

/// First free path among `name.ext`, `name (1).ext`, `name (2).ext`, ...
pub fn unique_destination(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match file_name.rfind('.') {
        Some(dot) if dot > 0 => (&file_name[..dot], &file_name[dot..]),
        _ => (file_name, ""),
    };
    (1_usize..)
        .map(|n| dir.join(format!("{stem} ({n}){ext}")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), DownloadError> {
    std::fs::write(path, contents).map_err(|source| DownloadError::Write {
        path: path.to_path_buf(),
        source,
    })
}
