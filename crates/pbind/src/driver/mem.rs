//! An in-memory, forward-only row source.
//!
//! Useful for tests and for callers that already hold rows in memory.
//! Rows are appended up front; [`MemRows::next`] positions the cursor and
//! [`pbind::scan`](crate::scan) reads the active row.

use super::{check_width, Rows, Scan, ValueRef};
use crate::{Error, Result};
use std::collections::HashMap;

/// An owned raw column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl Datum {
    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Datum::Null => ValueRef::Null,
            Datum::Bool(v) => ValueRef::Bool(*v),
            Datum::I64(v) => ValueRef::I64(*v),
            Datum::F64(v) => ValueRef::F64(*v),
            Datum::Text(v) => ValueRef::Text(v),
            Datum::Bytes(v) => ValueRef::Bytes(v),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemRows {
    columns: Vec<String>,
    rows: Vec<Vec<Datum>>,
    row_errors: HashMap<usize, String>,
    /// Index of the active row; `None` before the first call to `next`.
    cursor: Option<usize>,
    closed: bool,
}

impl MemRows {
    pub fn new<I, S>(columns: I) -> MemRows
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemRows {
            columns: columns.into_iter().map(Into::into).collect(),
            ..MemRows::default()
        }
    }

    /// Appends a row. The row may have a different number of values than
    /// there are columns; scanning such a row fails.
    pub fn add_row<I, D>(mut self, values: I) -> MemRows
    where
        I: IntoIterator<Item = D>,
        D: Into<Datum>,
    {
        self.rows.push(values.into_iter().map(Into::into).collect());
        self
    }

    /// Makes scanning row `index` fail with `message`.
    pub fn row_error(mut self, index: usize, message: impl Into<String>) -> MemRows {
        self.row_errors.insert(index, message.into());
        self
    }

    /// Advances to the next row. Returns `false` once the rows are exhausted.
    pub fn next(&mut self) -> bool {
        if self.closed {
            return false;
        }

        let next = self.cursor.map_or(0, |i| i + 1);
        self.cursor = Some(next.min(self.rows.len()));
        next < self.rows.len()
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    fn active_row(&self) -> Result<(usize, &[Datum])> {
        if self.closed {
            return Err(Error::invalid_row("rows are closed"));
        }

        match self.cursor {
            Some(index) if index < self.rows.len() => Ok((index, &self.rows[index])),
            Some(_) => Err(Error::invalid_row("no rows remaining")),
            None => Err(Error::invalid_row("scan called without calling next")),
        }
    }
}

impl Rows for MemRows {
    fn columns(&self) -> Result<Vec<String>> {
        if self.closed {
            return Err(Error::invalid_row("rows are closed"));
        }
        Ok(self.columns.clone())
    }

    fn scan(&mut self, dest: &mut dyn Scan) -> Result<()> {
        let (index, row) = self.active_row()?;

        if let Some(message) = self.row_errors.get(&index) {
            return Err(Error::invalid_row(message.clone()));
        }

        if row.len() != self.columns.len() {
            return Err(Error::invalid_row(format!(
                "row {} has {} values for {} columns",
                index,
                row.len(),
                self.columns.len()
            )));
        }

        check_width(dest, row.len())?;

        for (i, datum) in row.iter().enumerate() {
            dest.scan_column(i, datum.as_value_ref())?;
        }

        Ok(())
    }
}

impl From<bool> for Datum {
    fn from(src: bool) -> Self {
        Datum::Bool(src)
    }
}

impl From<i32> for Datum {
    fn from(src: i32) -> Self {
        Datum::I64(src.into())
    }
}

impl From<i64> for Datum {
    fn from(src: i64) -> Self {
        Datum::I64(src)
    }
}

impl From<f64> for Datum {
    fn from(src: f64) -> Self {
        Datum::F64(src)
    }
}

impl From<&str> for Datum {
    fn from(src: &str) -> Self {
        Datum::Text(src.to_string())
    }
}

impl From<String> for Datum {
    fn from(src: String) -> Self {
        Datum::Text(src)
    }
}

impl From<&[u8]> for Datum {
    fn from(src: &[u8]) -> Self {
        Datum::Bytes(src.to_vec())
    }
}

impl From<Vec<u8>> for Datum {
    fn from(src: Vec<u8>) -> Self {
        Datum::Bytes(src)
    }
}

impl<T: Into<Datum>> From<Option<T>> for Datum {
    fn from(src: Option<T>) -> Self {
        src.map_or(Datum::Null, Into::into)
    }
}
