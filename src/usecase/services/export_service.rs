use std::sync::Arc;

use thiserror::Error;

use crate::domain::entities::table::Table;
use crate::infra::error::CsvError;
use crate::infra::export::csv::{write_csv, WriteOptions};
use crate::usecase::ports::download::{DownloadError, DownloadOutcome, Downloader};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] CsvError),
    #[error(transparent)]
    Download(#[from] DownloadError),
}

pub struct ExportService {
    downloader: Arc<dyn Downloader>,
    options: WriteOptions,
}

impl ExportService {
    pub fn new(downloader: Arc<dyn Downloader>, options: WriteOptions) -> Self {
        Self {
            downloader,
            options,
        }
    }

    pub fn render(&self, table: &Table) -> Result<String, CsvError> {
        write_csv(table, self.options)
    }

    pub fn export(&self, table: &Table, download_name: &str) -> Result<DownloadOutcome, ExportError> {
        let text = self.render(table)?;
        let outcome = self.downloader.deliver(download_name, text.as_bytes())?;
        match &outcome {
            DownloadOutcome::Saved(path) => tracing::info!(
                rows = table.len(),
                destination = %path.display(),
                "exported csv"
            ),
            DownloadOutcome::Cancelled => tracing::info!(download_name, "export cancelled"),
        }
        Ok(outcome)
    }
}
