use super::Error;
use crate::schema::Kind;

/// Error when a field's kind cannot be scanned.
///
/// Only singular scalar fields are supported. Message, group, and enum
/// fields, as well as repeated and map fields, always fail regardless of
/// the value supplied for them.
#[derive(Debug)]
pub(super) struct UnsupportedKind {
    kind: Kind,
    list: bool,
}

impl std::error::Error for UnsupportedKind {}

impl core::fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.list {
            write!(f, "unsupported field kind repeated {} for scanning", self.kind)
        } else {
            write!(f, "unsupported field kind {} for scanning", self.kind)
        }
    }
}

impl Error {
    /// Creates an unsupported kind error.
    pub fn unsupported_kind(kind: Kind) -> Error {
        Error::from(super::ErrorKind::UnsupportedKind(UnsupportedKind {
            kind,
            list: false,
        }))
    }

    /// Creates an unsupported kind error for a repeated or map field.
    pub fn unsupported_list(kind: Kind) -> Error {
        Error::from(super::ErrorKind::UnsupportedKind(UnsupportedKind {
            kind,
            list: true,
        }))
    }

    /// Returns `true` if this error is an unsupported kind error.
    pub fn is_unsupported_kind(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedKind(_))
    }
}
