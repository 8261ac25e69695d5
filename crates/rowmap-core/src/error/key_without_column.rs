use super::Error;

/// Error when a field is marked as a key but is not mapped to a column.
#[derive(Debug)]
pub(super) struct KeyWithoutColumnError {
    entity: Box<str>,
    field: Box<str>,
}

impl std::error::Error for KeyWithoutColumnError {}

impl core::fmt::Display for KeyWithoutColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "key without column: {}.{}", self.entity, self.field)
    }
}

impl Error {
    /// Creates an error for a key field that has no column mapping.
    pub fn key_without_column(entity: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::KeyWithoutColumn(KeyWithoutColumnError {
            entity: entity.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a key without column error.
    pub fn is_key_without_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::KeyWithoutColumn(_))
    }
}
