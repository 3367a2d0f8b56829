use pbind::driver::{check_width, Carrier, Rows, Scan};
use pbind::{Error, Result, ValueRef};
use tokio_postgres::types::{FromSql, Type};

/// A row returned by `tokio_postgres`.
pub struct Row<'a> {
    row: &'a tokio_postgres::Row,
}

impl<'a> Row<'a> {
    pub fn new(row: &'a tokio_postgres::Row) -> Self {
        Self { row }
    }

    fn value(&self, index: usize) -> Result<ValueRef<'a>> {
        let ty = self.row.columns()[index].type_();

        let Some(carrier) = carrier(ty) else {
            return Err(Error::invalid_row(format!(
                "column {:?} has unsupported postgres type {}",
                self.row.columns()[index].name(),
                ty
            )));
        };

        // NOTE: the postgres type enum is not matchable, so the wire
        // representation is picked by comparing against each known type.
        Ok(match carrier {
            Carrier::Bool => self.get::<bool>(index)?.map(ValueRef::Bool),
            Carrier::I64 if *ty == Type::INT2 => {
                self.get::<i16>(index)?.map(|v| ValueRef::I64(v.into()))
            }
            Carrier::I64 if *ty == Type::INT4 => {
                self.get::<i32>(index)?.map(|v| ValueRef::I64(v.into()))
            }
            Carrier::I64 if *ty == Type::OID => {
                self.get::<u32>(index)?.map(|v| ValueRef::I64(v.into()))
            }
            Carrier::I64 => self.get::<i64>(index)?.map(ValueRef::I64),
            Carrier::F64 if *ty == Type::FLOAT4 => {
                self.get::<f32>(index)?.map(|v| ValueRef::F64(v.into()))
            }
            Carrier::F64 => self.get::<f64>(index)?.map(ValueRef::F64),
            Carrier::Text => self.get::<&'a str>(index)?.map(ValueRef::Text),
            Carrier::Bytes => self.get::<&'a [u8]>(index)?.map(ValueRef::Bytes),
            Carrier::Null => None,
        }
        .unwrap_or(ValueRef::Null))
    }

    fn get<T: FromSql<'a>>(&self, index: usize) -> Result<Option<T>> {
        self.row
            .try_get::<usize, Option<T>>(index)
            .map_err(Error::driver_operation_failed)
    }
}

impl Rows for Row<'_> {
    fn columns(&self) -> Result<Vec<String>> {
        Ok(self
            .row
            .columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect())
    }

    fn scan(&mut self, dest: &mut dyn Scan) -> Result<()> {
        check_width(dest, self.row.len())?;

        for index in 0..self.row.len() {
            dest.scan_column(index, self.value(index)?)?;
        }

        Ok(())
    }
}

/// Returns the raw value carrier used for columns of the given postgres type.
fn carrier(ty: &Type) -> Option<Carrier> {
    if *ty == Type::BOOL {
        Some(Carrier::Bool)
    } else if *ty == Type::INT2 || *ty == Type::INT4 || *ty == Type::INT8 || *ty == Type::OID {
        Some(Carrier::I64)
    } else if *ty == Type::FLOAT4 || *ty == Type::FLOAT8 {
        Some(Carrier::F64)
    } else if *ty == Type::TEXT
        || *ty == Type::VARCHAR
        || *ty == Type::BPCHAR
        || *ty == Type::NAME
    {
        Some(Carrier::Text)
    } else if *ty == Type::BYTEA {
        Some(Carrier::Bytes)
    } else {
        None
    }
}
