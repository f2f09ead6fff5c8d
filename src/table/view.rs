//! Row selections and their plain-text rendering

use super::Table;
use std::fmt;

const COLUMN_GAP: &str = "  ";

/// A selection of rows from a [`Table`], keeping the original row labels.
///
/// Displays as an aligned text grid:
///
/// ```text
///      A  B
/// 1  2.0  2
/// 2  NaN  2
/// ```
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    table: &'a Table,
    rows: Vec<usize>,
}

impl<'a> TableView<'a> {
    pub(super) fn new(table: &'a Table, rows: Vec<usize>) -> Self {
        Self { table, rows }
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    /// Labels (original row positions) of the selected rows.
    pub fn row_labels(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn fmt_empty(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<&str> = self.table.column_names().collect();
        let labels: Vec<String> = self.rows.iter().map(ToString::to_string).collect();
        write!(
            f,
            "Empty DataFrame\nColumns: [{}]\nIndex: [{}]",
            columns.join(", "),
            labels.join(", ")
        )
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() || self.table.num_columns() == 0 {
            return self.fmt_empty(f);
        }

        let labels: Vec<String> = self.rows.iter().map(ToString::to_string).collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        // Rendered cells, column-major.
        let columns: Vec<(&str, Vec<String>, usize)> = self
            .table
            .columns
            .iter()
            .map(|column| {
                let cells: Vec<String> = self
                    .rows
                    .iter()
                    .map(|&row| column.values[row].to_string())
                    .collect();
                let width = cells
                    .iter()
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(column.name.chars().count()))
                    .max()
                    .unwrap_or(0);
                (column.name.as_str(), cells, width)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (name, _, width) in &columns {
            write!(f, "{}{:>width$}", COLUMN_GAP, name, width = *width)?;
        }

        for (i, label) in labels.iter().enumerate() {
            write!(f, "\n{:<label_width$}", label)?;
            for (_, cells, width) in &columns {
                write!(f, "{}{:>width$}", COLUMN_GAP, cells[i], width = *width)?;
            }
        }
        Ok(())
    }
}
