use crate::domain::entities::edit::TableEdit;
use crate::domain::entities::table::Table;

pub const EXPORT_PREFIX: &str = "edited_";

/// Identifies one upload. Only the most recently issued ticket may replace the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    table: Table,
    file_name: String,
    upload_seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn export_file_name(&self) -> String {
        export_file_name(&self.file_name)
    }

    pub fn begin_upload(&mut self) -> UploadTicket {
        self.upload_seq += 1;
        UploadTicket(self.upload_seq)
    }

    pub fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.0 == self.upload_seq
    }

    /// Replaces table and file name together. Returns `false` for a stale ticket.
    pub fn complete_upload(&mut self, ticket: UploadTicket, file_name: String, table: Table) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.upload_seq,
                "discarding stale upload"
            );
            return false;
        }
        self.file_name = file_name;
        self.table = table;
        true
    }

    /// Applies one edit. Returns whether the table changed.
    pub fn apply(&mut self, edit: TableEdit) -> bool {
        let changed = match &edit {
            TableEdit::SetCell {
                row_idx,
                column,
                value,
            } => self.table.set_cell(*row_idx, column, value.clone()),
            TableEdit::AddRow => self.table.push_blank_row(),
            TableEdit::DeleteRow { row_idx } => self.table.remove_row(*row_idx).is_some(),
        };
        if !changed {
            tracing::debug!(?edit, rows = self.table.len(), "edit had no effect");
        }
        changed
    }
}

pub fn export_file_name(file_name: &str) -> String {
    format!("{EXPORT_PREFIX}{file_name}")
}
