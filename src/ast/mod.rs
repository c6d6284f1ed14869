//! Structured step arguments.
//!
//! - [`Table`] - Tabular data attached to a step, or an outline's examples
//! - [`Cell`] / [`CellRef`] - A table cell and an index into a table
//! - [`DocString`] - Block text attached to a step
//! - [`MultilineArg`] - Either of the above

pub mod table;

pub use table::{Cell, CellRef, DocString, MultilineArg, Table};
