use super::Error;
use crate::driver::Carrier;
use crate::schema::Kind;

/// Error when a raw column value arrives in a carrier type the field kind does not accept.
#[derive(Debug)]
pub(super) struct TypeMismatch {
    carrier: Carrier,
    kind: Kind,
}

impl std::error::Error for TypeMismatch {}

impl core::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot scan {} into {}", self.carrier, self.kind)?;
        if let Some(expected) = crate::field::expected_carrier(self.kind) {
            write!(f, " (expected {})", expected)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a type mismatch error from the observed carrier and the field's declared kind.
    pub fn type_mismatch(carrier: Carrier, kind: Kind) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatch { carrier, kind }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
