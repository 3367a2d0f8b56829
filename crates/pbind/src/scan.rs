use crate::driver::{Rows, Scan, ValueRef};
use crate::field::Field;
use crate::schema::{FieldDescriptor, Fields, Message};
use crate::{Error, Result};

/// Scans the active row of `rows` into `msg`.
///
/// The caller must advance `rows` onto a row before each call. Column (or
/// alias) names are matched against the message's field names, case
/// sensitively; a column without a matching field fails the call before any
/// value is read. Only singular scalar fields are supported.
///
/// On failure `msg` may be partially populated: fields of columns scanned
/// before the failing one keep their new values. Scan into a fresh message
/// per row and discard it on error when that matters.
pub fn scan<R, M>(rows: &mut R, msg: &mut M) -> Result<()>
where
    R: Rows + ?Sized,
    M: Message,
{
    let columns = rows.columns().map_err(|err| err.context("pbind scan"))?;

    let mut dest = Dest::resolve(msg, &columns)?;

    rows.scan(&mut dest).map_err(|err| err.context("pbind scan"))
}

/// The scan destinations of one row: one [`Field`] per column, in column
/// order, all writing into the same message.
pub struct Dest<'a, M: Message> {
    msg: &'a mut M,
    fields: Vec<Field<M::Field>>,
}

impl<'a, M: Message> Dest<'a, M> {
    /// Resolves every column name to a field of `msg`.
    ///
    /// Stops at the first column without a matching field.
    pub fn resolve(msg: &'a mut M, columns: &[String]) -> Result<Dest<'a, M>> {
        let descriptors = msg.fields();
        let mut fields = Vec::with_capacity(columns.len());

        for column in columns {
            let Some(desc) = descriptors.by_name(column) else {
                return Err(Error::field_not_found(column.as_str(), msg.type_name()));
            };

            fields.push(Field::new(desc));
        }

        Ok(Dest { msg, fields })
    }

    pub fn fields(&self) -> &[Field<M::Field>] {
        &self.fields
    }
}

impl<M: Message> Scan for Dest<'_, M> {
    fn width(&self) -> usize {
        self.fields.len()
    }

    fn scan_column(&mut self, index: usize, src: ValueRef<'_>) -> Result<()> {
        let Some(field) = self.fields.get(index) else {
            return Err(Error::invalid_row(format!(
                "column index {} out of range for {} destinations",
                index,
                self.fields.len()
            )));
        };

        field.scan(&mut *self.msg, src).map_err(|err| {
            err.context(crate::err!("column {:?}", field.descriptor().name()))
        })
    }
}
