use crate::domain::entities::table::Table;
use crate::infra::error::CsvError;
use crate::infra::import::csv::{parse_csv, Delimiter, ReadOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    pub file_name: String,
    pub table: Table,
    pub delimiter: Delimiter,
    pub reshaped_rows: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ImportService {
    options: ReadOptions,
}

impl ImportService {
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }

    pub fn import_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<ImportResult, CsvError> {
        let parsed = parse_csv(bytes, self.options)?;
        if parsed.reshaped_rows > 0 {
            tracing::warn!(
                file_name,
                reshaped_rows = parsed.reshaped_rows,
                "rows did not match the header width and were padded or truncated"
            );
        }
        tracing::info!(
            file_name,
            rows = parsed.table.len(),
            columns = parsed.table.columns().len(),
            delimiter = %parsed.delimiter,
            "imported csv"
        );
        Ok(ImportResult {
            file_name: file_name.to_string(),
            table: parsed.table,
            delimiter: parsed.delimiter,
            reshaped_rows: parsed.reshaped_rows,
        })
    }
}
