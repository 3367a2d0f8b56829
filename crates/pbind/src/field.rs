use crate::driver::{Carrier, ValueRef};
use crate::schema::{FieldDescriptor, Kind, Message, Value};
use crate::{Error, Result};

/// Adapter between one raw column value and one message field.
///
/// A `Field` is created per column for a single row and holds the column's
/// resolved descriptor. The target message is lent to [`Field::scan`] when
/// the driver delivers the value.
#[derive(Debug, Clone)]
pub struct Field<F> {
    desc: F,
}

impl<F: FieldDescriptor> Field<F> {
    pub fn new(desc: F) -> Field<F> {
        Field { desc }
    }

    pub fn descriptor(&self) -> &F {
        &self.desc
    }

    /// Coerces `src` into the field's declared kind and writes it into `msg`.
    ///
    /// Only the bound field is touched.
    pub fn scan<M>(&self, msg: &mut M, src: ValueRef<'_>) -> Result<()>
    where
        M: Message<Field = F>,
    {
        if self.desc.is_list() {
            return Err(Error::unsupported_list(self.desc.kind()));
        }

        let value = coerce(self.desc.kind(), src)?;
        msg.set(&self.desc, value)
    }
}

/// Converts a raw value into the typed value required by `kind`.
///
/// Each kind accepts exactly one carrier. Integers narrow or reinterpret
/// the 64-bit carrier with `as` casts, so out of range and negative values
/// wrap rather than fail.
pub fn coerce(kind: Kind, src: ValueRef<'_>) -> Result<Value> {
    if !kind.is_scalar() {
        return Err(Error::unsupported_kind(kind));
    }

    let value = match (kind, src) {
        (Kind::Bool, ValueRef::Bool(v)) => Value::Bool(v),
        (Kind::Int32 | Kind::Sint32 | Kind::Sfixed32, ValueRef::I64(v)) => Value::I32(v as i32),
        (Kind::Uint32 | Kind::Fixed32, ValueRef::I64(v)) => Value::U32(v as u32),
        (Kind::Int64 | Kind::Sint64 | Kind::Sfixed64, ValueRef::I64(v)) => Value::I64(v),
        (Kind::Uint64 | Kind::Fixed64, ValueRef::I64(v)) => Value::U64(v as u64),
        (Kind::Float, ValueRef::F64(v)) => Value::F32(v as f32),
        (Kind::Double, ValueRef::F64(v)) => Value::F64(v),
        (Kind::String, ValueRef::Text(v)) => Value::String(v.to_owned()),
        // The driver may reuse its buffer after the scan returns.
        (Kind::Bytes, ValueRef::Bytes(v)) => Value::Bytes(v.to_vec()),
        (_, src) => return Err(Error::type_mismatch(src.ty(), kind)),
    };

    Ok(value)
}

/// The carrier a scalar kind accepts.
pub(crate) fn expected_carrier(kind: Kind) -> Option<Carrier> {
    match kind {
        Kind::Bool => Some(Carrier::Bool),
        Kind::Int32
        | Kind::Sint32
        | Kind::Sfixed32
        | Kind::Uint32
        | Kind::Fixed32
        | Kind::Int64
        | Kind::Sint64
        | Kind::Sfixed64
        | Kind::Uint64
        | Kind::Fixed64 => Some(Carrier::I64),
        Kind::Float | Kind::Double => Some(Carrier::F64),
        Kind::String => Some(Carrier::Text),
        Kind::Bytes => Some(Carrier::Bytes),
        Kind::Enum | Kind::Message | Kind::Group => None,
    }
}
