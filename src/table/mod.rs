//! In-memory tables for log previews
//!
//! A [`Table`] is an ordered set of named columns of equal length. The
//! logger never mutates a table; it selects rows into a [`TableView`] and
//! renders the view as aligned plain text.

mod cell;
mod json;
mod view;

pub use cell::Cell;
pub use view::TableView;

use std::borrow::Cow;
use std::collections::HashMap;

/// Why a value could not be used as a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("expected a table, found {0}")]
    NotATable(String),

    #[error("column '{column}' has {found} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("column '{0}' appears more than once")]
    DuplicateColumn(String),

    #[error("column '{0}' not found")]
    UnknownColumn(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    values: Vec<Cell>,
}

/// Named columns of equal length.
///
/// # Example
///
/// ```
/// use redquill::Table;
///
/// let table = Table::new()
///     .with_column("A", [Some(1.0), Some(2.0), None, Some(3.0)])?
///     .with_column("B", [4, 2, 2, 5])?;
///
/// assert_eq!(table.num_rows(), 4);
/// assert_eq!(table.null_rows().row_labels(), &[2]);
/// # Ok::<(), redquill::TableError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, values)` pairs.
    pub fn from_columns<I, N, V, C>(columns: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut table = Table::new();
        for (name, values) in columns {
            table.push_column(name, values)?;
        }
        Ok(table)
    }

    pub fn with_column<N, V, C>(mut self, name: N, values: V) -> Result<Self, TableError>
    where
        N: Into<String>,
        V: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.push_column(name, values)?;
        Ok(self)
    }

    /// Append a column. The first column fixes the row count.
    pub fn push_column<N, V, C>(&mut self, name: N, values: V) -> Result<(), TableError>
    where
        N: Into<String>,
        V: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let name = name.into();
        if self.column_index(&name).is_some() {
            return Err(TableError::DuplicateColumn(name));
        }

        let values: Vec<Cell> = values.into_iter().map(Into::into).collect();
        if self.columns.is_empty() {
            self.rows = values.len();
        } else if values.len() != self.rows {
            return Err(TableError::RaggedColumns {
                column: name,
                expected: self.rows,
                found: values.len(),
            });
        }

        self.columns.push(Column { name, values });
        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.column_index(name)
            .map(|idx| self.columns[idx].values.as_slice())
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.columns.get(column).and_then(|c| c.values.get(row))
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Every row, in order.
    pub fn all_rows(&self) -> TableView<'_> {
        TableView::new(self, (0..self.rows).collect())
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> TableView<'_> {
        TableView::new(self, (0..n.min(self.rows)).collect())
    }

    /// The last `n` rows.
    pub fn tail(&self, n: usize) -> TableView<'_> {
        let start = self.rows - n.min(self.rows);
        TableView::new(self, (start..self.rows).collect())
    }

    /// Every occurrence of a row whose values in `subset` appear more than once.
    ///
    /// `None` or an empty subset compares all columns. Missing values
    /// compare equal to each other.
    pub fn duplicated_rows(&self, subset: Option<&[&str]>) -> Result<TableView<'_>, TableError> {
        let columns: Vec<usize> = match subset {
            Some(names) if !names.is_empty() => names
                .iter()
                .map(|name| {
                    self.column_index(name)
                        .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
                })
                .collect::<Result<_, _>>()?,
            _ => (0..self.columns.len()).collect(),
        };

        let keys: Vec<Vec<cell::CellKey<'_>>> = (0..self.rows)
            .map(|row| {
                columns
                    .iter()
                    .map(|&col| self.columns[col].values[row].key())
                    .collect()
            })
            .collect();

        let mut occurrences: HashMap<&[cell::CellKey<'_>], usize> = HashMap::new();
        for key in &keys {
            *occurrences.entry(key.as_slice()).or_insert(0) += 1;
        }

        let rows = keys
            .iter()
            .enumerate()
            .filter(|(_, key)| occurrences.get(key.as_slice()).copied().unwrap_or(0) > 1)
            .map(|(row, _)| row)
            .collect();

        Ok(TableView::new(self, rows))
    }

    /// Rows holding at least one missing value.
    pub fn null_rows(&self) -> TableView<'_> {
        let rows = (0..self.rows)
            .filter(|&row| self.columns.iter().any(|c| c.values[row].is_null()))
            .collect();
        TableView::new(self, rows)
    }

    /// Build a table from loosely typed JSON.
    ///
    /// Accepts an object of column arrays (`{"A": [1, 2], "B": [3, 4]}`) or
    /// an array of record objects (`[{"A": 1, "B": 3}, {"A": 2, "B": 4}]`).
    pub fn from_json(value: &serde_json::Value) -> Result<Self, TableError> {
        json::table_from_json(value)
    }
}

/// Anything that may be handed to the table helpers.
///
/// A [`Table`] always converts; loosely typed inputs are checked and
/// converted on the way in.
pub trait TableSource {
    fn to_table(&self) -> Result<Cow<'_, Table>, TableError>;
}

impl TableSource for Table {
    fn to_table(&self) -> Result<Cow<'_, Table>, TableError> {
        Ok(Cow::Borrowed(self))
    }
}

impl TableSource for serde_json::Value {
    fn to_table(&self) -> Result<Cow<'_, Table>, TableError> {
        Table::from_json(self).map(Cow::Owned)
    }
}

impl TableSource for str {
    fn to_table(&self) -> Result<Cow<'_, Table>, TableError> {
        let value: serde_json::Value = serde_json::from_str(self)
            .map_err(|_| TableError::NotATable("text that is not JSON".to_string()))?;
        Table::from_json(&value).map(Cow::Owned)
    }
}

impl TableSource for String {
    fn to_table(&self) -> Result<Cow<'_, Table>, TableError> {
        self.as_str().to_table()
    }
}
