use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::entities::table::Table;
use crate::infra::error::CsvError;
use crate::infra::import::csv::Delimiter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    pub delimiter: Delimiter,
}

/// Serializes the header followed by every row. A table without rows yields `""`.
pub fn write_csv(table: &Table, options: WriteOptions) -> Result<String, CsvError> {
    if table.is_empty() {
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter.byte())
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| CsvError::Flush(err.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
