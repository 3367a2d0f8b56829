use super::Error;

/// Error when a row cannot be read in its current state.
///
/// This occurs when:
/// - The cursor has not been advanced onto a row, or is already exhausted
/// - The number of scan destinations differs from the number of columns
/// - The engine reports an error for the row itself
/// - A column has a database type with no raw value representation
#[derive(Debug)]
pub(super) struct InvalidRow {
    message: Box<str>,
}

impl std::error::Error for InvalidRow {}

impl core::fmt::Display for InvalidRow {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid row: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid row error.
    pub fn invalid_row(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRow(InvalidRow {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid row error.
    pub fn is_invalid_row(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRow(_))
    }
}
