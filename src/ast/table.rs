//! Data tables and doc strings.

use serde::{Deserialize, Serialize};

use crate::steps::status::StepStatus;

/// A single table cell.
///
/// Cells of an examples table carry the status of the step that consumed
/// them, so a renderer can colour each cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell text.
    pub value: String,

    /// Status mirrored from the step bound to this cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StepStatus>,
}

impl Cell {
    /// Create a cell without a status.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            status: None,
        }
    }
}

/// Index of a cell inside a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// Zero-based row index (the header is row 0).
    pub row: usize,
    /// Zero-based column index.
    pub column: usize,
}

impl CellRef {
    /// Create a cell reference.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Tabular data.
///
/// # Example
///
/// ```
/// use cukerun::ast::{CellRef, Table};
/// use cukerun::steps::StepStatus;
///
/// let mut table = Table::from_rows(vec![vec!["name", "age"], vec!["ann", "31"]]);
/// table.set_status(CellRef::new(1, 0), StepStatus::Passed);
///
/// assert_eq!(table.cell(CellRef::new(1, 0)).unwrap().status, Some(StepStatus::Passed));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table from raw cell values.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Cell::new).collect())
                .collect(),
        }
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows including the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a cell.
    pub fn cell(&self, at: CellRef) -> Option<&Cell> {
        self.rows.get(at.row)?.get(at.column)
    }

    /// Set the status of one cell.
    ///
    /// Returns `false` when the reference is out of bounds.
    pub fn set_status(&mut self, at: CellRef, status: StepStatus) -> bool {
        match self.rows.get_mut(at.row).and_then(|row| row.get_mut(at.column)) {
            Some(cell) => {
                cell.status = Some(status);
                true
            }
            None => false,
        }
    }
}

/// Block text attached to a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocString {
    /// The text between the delimiters.
    pub content: String,

    /// Optional content type written after the opening delimiter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl DocString {
    /// Create a doc string without a content type.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: None,
        }
    }
}

/// Structured argument attached to a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MultilineArg {
    /// A data table.
    Table(Table),
    /// A doc string.
    DocString(DocString),
}

impl MultilineArg {
    /// The table, if this argument is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            MultilineArg::Table(table) => Some(table),
            MultilineArg::DocString(_) => None,
        }
    }

    /// The doc string, if this argument is one.
    pub fn as_doc_string(&self) -> Option<&DocString> {
        match self {
            MultilineArg::DocString(doc) => Some(doc),
            MultilineArg::Table(_) => None,
        }
    }
}

impl From<Table> for MultilineArg {
    fn from(table: Table) -> Self {
        MultilineArg::Table(table)
    }
}

impl From<DocString> for MultilineArg {
    fn from(doc: DocString) -> Self {
        MultilineArg::DocString(doc)
    }
}
