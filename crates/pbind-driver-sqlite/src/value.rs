use pbind::{Result, ValueRef};
use rusqlite::types::ValueRef as SqlValueRef;

/// Converts a SQLite value to a raw column value.
///
/// SQLite stores booleans as integers; columns declared `BOOL` or `BOOLEAN`
/// are reported as booleans so they can be scanned into bool fields.
pub(crate) fn from_sql<'a>(
    value: SqlValueRef<'a>,
    decl_type: Option<&str>,
) -> Result<ValueRef<'a>> {
    Ok(match value {
        SqlValueRef::Null => ValueRef::Null,
        SqlValueRef::Integer(value) if is_bool(decl_type) => ValueRef::Bool(value != 0),
        SqlValueRef::Integer(value) => ValueRef::I64(value),
        SqlValueRef::Real(value) => ValueRef::F64(value),
        SqlValueRef::Text(value) => ValueRef::Text(std::str::from_utf8(value)?),
        SqlValueRef::Blob(value) => ValueRef::Bytes(value),
    })
}

fn is_bool(decl_type: Option<&str>) -> bool {
    decl_type
        .is_some_and(|ty| ty.eq_ignore_ascii_case("bool") || ty.eq_ignore_ascii_case("boolean"))
}
