#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub row_idx: usize,
    pub col_idx: usize,
    pub column: String,
}

/// The only ways a loaded table is changed between uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEdit {
    SetCell {
        row_idx: usize,
        column: String,
        value: String,
    },
    AddRow,
    DeleteRow {
        row_idx: usize,
    },
}
