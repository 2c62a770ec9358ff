use crate::domain::entities::edit::CellKey;
use crate::domain::entities::session::Session;

pub const ACTIONS_HEADER: &str = "Actions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub key: CellKey,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub row_idx: usize,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Column names followed by the trailing actions header.
    pub headers: Vec<String>,
    pub rows: Vec<RowView>,
    /// Inputs and row buttons are disabled while an upload is in flight.
    pub locked: bool,
}

/// `None` while no rows are loaded, which leaves only the upload control on screen.
pub fn project(session: &Session, busy: bool) -> Option<TableView> {
    let table = session.table();
    if table.is_empty() {
        return None;
    }

    let headers = table
        .columns()
        .iter()
        .cloned()
        .chain(std::iter::once(ACTIONS_HEADER.to_string()))
        .collect();

    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(row_idx, row)| RowView {
            row_idx,
            cells: table
                .columns()
                .iter()
                .zip(row.iter())
                .enumerate()
                .map(|(col_idx, (column, value))| CellView {
                    key: CellKey {
                        row_idx,
                        col_idx,
                        column: column.clone(),
                    },
                    value: value.clone(),
                })
                .collect(),
        })
        .collect();

    Some(TableView {
        headers,
        rows,
        locked: busy,
    })
}
