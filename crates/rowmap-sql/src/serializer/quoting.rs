use super::Serializer;

/// How string literals are written into the statement text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) enum Quoting {
    /// Wrap the text in single quotes and leave its contents untouched.
    /// Callers must sanitize text containing `'` themselves.
    #[default]
    Verbatim,

    /// Wrap the text in single quotes and double every embedded `'`.
    Escaped,
}

impl Serializer {
    /// Serializer that writes string literals verbatim between single quotes.
    pub fn verbatim() -> Serializer {
        Serializer {
            quoting: Quoting::Verbatim,
        }
    }

    /// Serializer that doubles single quotes embedded in string literals.
    pub fn escaped() -> Serializer {
        Serializer {
            quoting: Quoting::Escaped,
        }
    }

    pub fn is_escaped(&self) -> bool {
        self.quoting == Quoting::Escaped
    }
}
