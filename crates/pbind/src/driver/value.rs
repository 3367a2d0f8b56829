use std::fmt;

/// A raw column value as produced by a driver.
///
/// Text and byte values borrow from the driver's row buffer, which may be
/// reused once the scan call returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    /// SQL NULL
    Null,

    /// Boolean value
    Bool(bool),

    /// Any integer column, widened to 64 bits
    I64(i64),

    /// Any floating point column, widened to 64 bits
    F64(f64),

    /// Text column
    Text(&'a str),

    /// Binary column
    Bytes(&'a [u8]),
}

/// The carrier type of a [`ValueRef`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carrier {
    Null,
    Bool,
    I64,
    F64,
    Text,
    Bytes,
}

impl ValueRef<'_> {
    pub fn ty(&self) -> Carrier {
        match self {
            ValueRef::Null => Carrier::Null,
            ValueRef::Bool(_) => Carrier::Bool,
            ValueRef::I64(_) => Carrier::I64,
            ValueRef::F64(_) => Carrier::F64,
            ValueRef::Text(_) => Carrier::Text,
            ValueRef::Bytes(_) => Carrier::Bytes,
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Carrier::Null => "null",
            Carrier::Bool => "bool",
            Carrier::I64 => "int64",
            Carrier::F64 => "float64",
            Carrier::Text => "text",
            Carrier::Bytes => "bytes",
        })
    }
}

impl From<bool> for ValueRef<'_> {
    fn from(src: bool) -> Self {
        ValueRef::Bool(src)
    }
}

impl From<i64> for ValueRef<'_> {
    fn from(src: i64) -> Self {
        ValueRef::I64(src)
    }
}

impl From<f64> for ValueRef<'_> {
    fn from(src: f64) -> Self {
        ValueRef::F64(src)
    }
}

impl<'a> From<&'a str> for ValueRef<'a> {
    fn from(src: &'a str) -> Self {
        ValueRef::Text(src)
    }
}

impl<'a> From<&'a [u8]> for ValueRef<'a> {
    fn from(src: &'a [u8]) -> Self {
        ValueRef::Bytes(src)
    }
}
