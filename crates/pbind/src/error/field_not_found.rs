use super::Error;

/// Error when a result column has no field of the same name in the target message.
///
/// Matching is exact and case sensitive. Use a column alias in the query when
/// the column name differs from the field name.
#[derive(Debug)]
pub(super) struct FieldNotFound {
    column: Box<str>,
    message: Box<str>,
}

impl std::error::Error for FieldNotFound {}

impl core::fmt::Display for FieldNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:?} field not in message {}", self.column, self.message)
    }
}

impl Error {
    /// Creates a field-not-found error for `column` against the message type `message`.
    pub fn field_not_found(column: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FieldNotFound(FieldNotFound {
            column: column.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a field-not-found error.
    pub fn is_field_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldNotFound(_))
    }

    /// Returns the unmatched column name if this is a field-not-found error.
    pub fn unmatched_column(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::FieldNotFound(err) => Some(&err.column),
            _ => None,
        }
    }
}
