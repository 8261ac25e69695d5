use super::Error;

/// Error when an entity type maps no field to a column.
#[derive(Debug)]
pub(super) struct MissingColumnMetadataError {
    entity: Box<str>,
}

impl std::error::Error for MissingColumnMetadataError {}

impl core::fmt::Display for MissingColumnMetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing column metadata: {}", self.entity)
    }
}

impl Error {
    /// Creates an error for an entity type without any column fields.
    pub fn missing_column_metadata(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingColumnMetadata(
            MissingColumnMetadataError {
                entity: entity.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a missing column metadata error.
    pub fn is_missing_column_metadata(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingColumnMetadata(_))
    }
}
