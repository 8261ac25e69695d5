use super::Error;

/// Error when an entity type has no table mapping.
#[derive(Debug)]
pub(super) struct MissingTableMetadataError {
    entity: Box<str>,
}

impl std::error::Error for MissingTableMetadataError {}

impl core::fmt::Display for MissingTableMetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing table metadata: {}", self.entity)
    }
}

impl Error {
    /// Creates an error for an entity type that carries no table mapping.
    pub fn missing_table_metadata(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingTableMetadata(
            MissingTableMetadataError {
                entity: entity.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a missing table metadata error.
    pub fn is_missing_table_metadata(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingTableMetadata(_))
    }
}
