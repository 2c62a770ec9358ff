use std::collections::HashSet;
use std::fmt;

use csv::{ByteRecord, ReaderBuilder};

use crate::domain::entities::table::Table;
use crate::infra::error::CsvError;

const SNIFF_RECORDS: usize = 10;
const SNIFF_CANDIDATES: [Delimiter; 4] = [
    Delimiter::Comma,
    Delimiter::Tab,
    Delimiter::Pipe,
    Delimiter::Semicolon,
];
const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    pub fn byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Pipe => b'|',
            Delimiter::Semicolon => b';',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Pipe => "pipe",
            Delimiter::Semicolon => "semicolon",
        };
        f.write_str(name)
    }
}

/// Parses a sample with each candidate and keeps the one that splits every sampled
/// record into the same number of fields, more than one. Quoted delimiters do not
/// count. Comma wins ties and is the fallback.
pub fn detect_delimiter(content: &str) -> Delimiter {
    let mut best: Option<(Delimiter, usize)> = None;
    for candidate in SNIFF_CANDIDATES {
        let Some(fields) = consistent_field_count(content, candidate) else {
            continue;
        };
        if fields > 1 && best.map_or(true, |(_, best_fields)| fields > best_fields) {
            best = Some((candidate, fields));
        }
    }
    best.map(|(delimiter, _)| delimiter).unwrap_or_default()
}

fn consistent_field_count(content: &str, delimiter: Delimiter) -> Option<usize> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut expected = None;
    for record in reader.byte_records().take(SNIFF_RECORDS) {
        let len = record.ok()?.len();
        match expected {
            None => expected = Some(len),
            Some(fields) if fields != len => return None,
            Some(_) => {}
        }
    }
    expected
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOptions {
    /// `None` sniffs the delimiter from the content.
    pub delimiter: Option<Delimiter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCsv {
    pub table: Table,
    pub delimiter: Delimiter,
    /// Rows whose field count differed from the header and were padded or truncated.
    pub reshaped_rows: usize,
}

/// Parses header-mode CSV. The first record supplies the column names.
pub fn parse_csv(bytes: &[u8], options: ReadOptions) -> Result<ParsedCsv, CsvError> {
    let delimiter = options
        .delimiter
        .unwrap_or_else(|| detect_delimiter(&String::from_utf8_lossy(bytes)));

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.byte_headers()?.clone();
    let mut columns: Vec<String> = headers.iter().map(decode_field).collect();
    if let Some(first) = columns.first_mut() {
        if let Some(stripped) = first.strip_prefix(BYTE_ORDER_MARK) {
            *first = stripped.to_string();
        }
    }
    if columns.is_empty() || (columns.len() == 1 && columns[0].is_empty()) {
        return Err(CsvError::MissingHeader);
    }
    let columns = dedupe_headers(columns);
    let header_len = columns.len();

    let mut rows = Vec::new();
    let mut reshaped_rows = 0_usize;
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        if record.len() != header_len {
            reshaped_rows += 1;
        }
        let row = (0..header_len)
            .map(|col_idx| record.get(col_idx).map(decode_field).unwrap_or_default())
            .collect::<Vec<_>>();
        rows.push(row);
    }

    Ok(ParsedCsv {
        table: Table::new(columns, rows),
        delimiter,
        reshaped_rows,
    })
}

/// Renames repeated headers to `name_1`, `name_2`, ... keeping the first as-is.
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut unique = Vec::with_capacity(headers.len());
    for header in headers {
        let mut candidate = header.clone();
        let mut suffix = 1_usize;
        while seen.contains(&candidate) {
            candidate = format!("{header}_{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        unique.push(candidate);
    }
    unique
}

fn decode_field(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}
