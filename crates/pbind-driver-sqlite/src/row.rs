use crate::value;
use pbind::driver::{check_width, Rows, Scan};
use pbind::{Error, Result};

/// A rusqlite row, as returned by advancing `rusqlite::Rows`.
///
/// ```ignore
/// let mut rows = stmt.query([])?;
/// while let Some(row) = rows.next()? {
///     let mut msg = DynamicMessage::new(descriptor.clone());
///     pbind::scan(&mut Row::new(row), &mut msg)?;
/// }
/// ```
pub struct Row<'a, 'stmt> {
    row: &'a rusqlite::Row<'stmt>,
}

impl<'a, 'stmt> Row<'a, 'stmt> {
    pub fn new(row: &'a rusqlite::Row<'stmt>) -> Self {
        Self { row }
    }
}

impl Rows for Row<'_, '_> {
    fn columns(&self) -> Result<Vec<String>> {
        Ok(self
            .row
            .as_ref()
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn scan(&mut self, dest: &mut dyn Scan) -> Result<()> {
        let stmt = self.row.as_ref();
        let columns = stmt.columns();

        check_width(dest, columns.len())?;

        for (index, column) in columns.iter().enumerate() {
            let raw = self
                .row
                .get_ref(index)
                .map_err(Error::driver_operation_failed)?;

            dest.scan_column(index, value::from_sql(raw, column.decl_type())?)?;
        }

        Ok(())
    }
}
