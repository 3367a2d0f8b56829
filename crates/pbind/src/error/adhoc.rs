/// Error carrying a free-form message, created with `err!` or `bail!`.
///
/// Also used for plain context strings added with [`Error::context`](super::Error::context).
#[derive(Debug)]
pub(super) struct Adhoc {
    message: Box<str>,
}

impl Adhoc {
    pub(super) fn new(message: impl Into<String>) -> Adhoc {
        Adhoc {
            message: message.into().into(),
        }
    }
}

impl std::error::Error for Adhoc {}

impl core::fmt::Display for Adhoc {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}
