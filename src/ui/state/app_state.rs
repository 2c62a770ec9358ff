use dioxus::prelude::*;

use crate::domain::entities::edit::TableEdit;
use crate::domain::entities::session::{Session, UploadTicket};
use crate::infra::error::CsvError;
use crate::usecase::ports::download::DownloadOutcome;
use crate::usecase::services::export_service::ExportError;
use crate::usecase::services::import_service::ImportResult;

pub const READY_STATUS: &str = "Ready";

/// Session state shared through context. Views read it; only these methods write it.
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: Signal<Session>,
    pub status: Signal<String>,
    pub busy: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: use_signal(Session::new),
            status: use_signal(|| READY_STATUS.to_string()),
            busy: use_signal(|| false),
        }
    }

    pub fn apply(mut self, edit: TableEdit) {
        let structural = !matches!(edit, TableEdit::SetCell { .. });
        let description = format!("{edit:?}");
        let changed = self.session.write().apply(edit);
        if changed && structural {
            let rows = self.session.read().table().len();
            tracing::info!(edit = %description, rows, "table updated");
            self.status.set(count_noun(rows, "row"));
        }
    }

    pub fn begin_upload(mut self) -> UploadTicket {
        self.busy.set(true);
        self.status.set("Choosing file...".to_string());
        self.session.write().begin_upload()
    }

    pub fn cancel_upload(mut self, ticket: UploadTicket) {
        if !self.session.read().is_current(ticket) {
            return;
        }
        self.busy.set(false);
        self.status.set("Upload cancelled".to_string());
    }

    pub fn finish_upload(mut self, ticket: UploadTicket, result: Result<ImportResult, CsvError>) {
        match result {
            Ok(imported) => {
                let message = import_status_message(&imported);
                let applied = self.session.write().complete_upload(
                    ticket,
                    imported.file_name,
                    imported.table,
                );
                if applied {
                    self.busy.set(false);
                    self.status.set(message);
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to parse uploaded csv");
                if self.session.read().is_current(ticket) {
                    self.busy.set(false);
                    self.status.set(format!("Upload failed: {err}"));
                }
            }
        }
    }

    pub fn finish_export(mut self, result: Result<DownloadOutcome, ExportError>) {
        let message = match result {
            Ok(outcome) => export_status_message(&outcome),
            Err(err) => {
                tracing::error!(error = %err, "failed to export csv");
                format!("Download failed: {err}")
            }
        };
        self.status.set(message);
    }
}

pub fn import_status_message(imported: &ImportResult) -> String {
    let mut message = format!(
        "Loaded {} ({}, {})",
        imported.file_name,
        count_noun(imported.table.len(), "row"),
        count_noun(imported.table.columns().len(), "column")
    );
    if imported.reshaped_rows > 0 {
        message.push_str(&format!(
            "; {} padded or truncated to the header width",
            count_noun(imported.reshaped_rows, "row")
        ));
    }
    message
}

fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn export_status_message(outcome: &DownloadOutcome) -> String {
    match outcome {
        DownloadOutcome::Saved(path) => format!("Saved {}", path.display()),
        DownloadOutcome::Cancelled => "Download cancelled".to_string(),
    }
}
