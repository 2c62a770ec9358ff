/// In-memory CSV table: one ordered column list shared by every row.
///
/// Rows are stored positionally, so `rows[r][c]` is the value of column
/// `columns[c]`. Every row always holds exactly `columns.len()` values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table, padding short rows with empty strings and truncating long ones.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, row_idx: usize) -> Option<&[String]> {
        self.rows.get(row_idx).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A table with a header but no rows still counts as empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    pub fn cell(&self, row_idx: usize, column: &str) -> Option<&str> {
        let col_idx = self.column_index(column)?;
        self.rows
            .get(row_idx)
            .and_then(|row| row.get(col_idx))
            .map(String::as_str)
    }

    /// Column-to-value view of one row, in column order.
    pub fn row_entries(&self, row_idx: usize) -> Option<Vec<(&str, &str)>> {
        let row = self.rows.get(row_idx)?;
        Some(
            self.columns
                .iter()
                .zip(row.iter())
                .map(|(column, value)| (column.as_str(), value.as_str()))
                .collect(),
        )
    }

    /// Returns `false` when the row or column does not exist.
    pub fn set_cell(&mut self, row_idx: usize, column: &str, value: String) -> bool {
        let Some(col_idx) = self.column_index(column) else {
            return false;
        };
        match self.rows.get_mut(row_idx).and_then(|row| row.get_mut(col_idx)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Appends a row of empty strings. No-op on an empty table.
    pub fn push_blank_row(&mut self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        self.rows.push(vec![String::new(); self.columns.len()]);
        true
    }

    pub fn remove_row(&mut self, row_idx: usize) -> Option<Vec<String>> {
        if row_idx >= self.rows.len() {
            return None;
        }
        Some(self.rows.remove(row_idx))
    }
}
