use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use directories::{ProjectDirs, UserDirs};

use crate::platform::desktop::download::{DownloadsFolder, SaveDialog};
use crate::usecase::ports::download::Downloader;

pub const APP_TITLE: &str = "CSV Management Tool";
pub const DOWNLOAD_MODE_ENV: &str = "CSV_EDITOR_DOWNLOAD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadMode {
    #[default]
    DownloadsFolder,
    Prompt,
}

impl DownloadMode {
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "prompt" => DownloadMode::Prompt,
            _ => DownloadMode::DownloadsFolder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub download_dir: PathBuf,
    pub download_mode: DownloadMode,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let project_dirs = ProjectDirs::from("com", "csv-editor", "csv-editor")
            .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
        let download_mode =
            DownloadMode::from_env_value(std::env::var(DOWNLOAD_MODE_ENV).ok().as_deref());

        Ok(Self {
            data_dir: project_dirs.data_local_dir().to_path_buf(),
            download_dir: default_download_dir()?,
            download_mode,
        })
    }

    pub fn downloader(&self) -> Arc<dyn Downloader> {
        match self.download_mode {
            DownloadMode::DownloadsFolder => {
                Arc::new(DownloadsFolder::new(self.download_dir.clone()))
            }
            DownloadMode::Prompt => Arc::new(SaveDialog::new(self.download_dir.clone())),
        }
    }
}

fn default_download_dir() -> Result<PathBuf> {
    if let Some(user_dirs) = UserDirs::new() {
        let dir = user_dirs
            .download_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| user_dirs.home_dir().to_path_buf());
        return Ok(dir);
    }
    std::env::current_dir().context("failed to resolve current directory")
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview data directory: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}
