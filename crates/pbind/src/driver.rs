//! The row-iteration engine boundary.
//!
//! A driver exposes the active row's column names and feeds one raw
//! [`ValueRef`] per column into a [`Scan`] destination. Cursor positioning
//! (advancing, closing) stays with the driver and its caller.

pub mod mem;

mod value;
pub use value::{Carrier, ValueRef};

use crate::Result;

/// Destination for the raw values of one row, one slot per column.
pub trait Scan {
    /// Number of columns this destination accepts.
    fn width(&self) -> usize;

    /// Consumes the raw value of column `index`.
    fn scan_column(&mut self, index: usize, src: ValueRef<'_>) -> Result<()>;
}

/// A cursor positioned on a row.
pub trait Rows {
    /// Column names of the active row, in select order.
    fn columns(&self) -> Result<Vec<String>>;

    /// Routes the active row's raw values into `dest`, in column order.
    ///
    /// Implementations must fail if `dest.width()` differs from the number
    /// of columns, and must stop at the first failing column.
    fn scan(&mut self, dest: &mut dyn Scan) -> Result<()>;
}

/// Checks that a destination accepts exactly `columns` values.
pub fn check_width(dest: &dyn Scan, columns: usize) -> Result<()> {
    if dest.width() != columns {
        return Err(crate::Error::invalid_row(format!(
            "expected {} destination arguments in scan, not {}",
            columns,
            dest.width()
        )));
    }
    Ok(())
}
