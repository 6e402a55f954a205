#![deny(unsafe_code)]

use std::collections::BTreeMap;

/// A single dataset row: column name to raw string value.
///
/// A value is *missing* when the key is absent or the stored string is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from (column, value) pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value for a column, or `None` when the cell is missing.
    pub fn value(&self, column: &str) -> Option<&str> {
        match self.cells.get(column) {
            Some(value) if !value.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn remove(&mut self, column: &str) {
        self.cells.remove(column);
    }
}

/// An in-memory tabular dataset.
///
/// `columns` is the ordered list of distinct column names and defines the
/// canonical ordering used by the correlation matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Drop a column from the schema and from every row.
    ///
    /// Returns a new table; the receiver is never mutated.
    #[must_use]
    pub fn without_column(&self, name: &str) -> Table {
        let columns = self
            .columns
            .iter()
            .filter(|c| c.as_str() != name)
            .cloned()
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.remove(name);
                row
            })
            .collect();
        Table { columns, rows }
    }
}
