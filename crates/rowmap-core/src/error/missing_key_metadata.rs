use super::Error;

/// Error when a row-scoped statement is requested for an entity type
/// without key fields.
#[derive(Debug)]
pub(super) struct MissingKeyMetadataError {
    entity: Box<str>,
}

impl std::error::Error for MissingKeyMetadataError {}

impl core::fmt::Display for MissingKeyMetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing key metadata: {}", self.entity)
    }
}

impl Error {
    /// Creates an error for an entity type that has no key fields.
    pub fn missing_key_metadata(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingKeyMetadata(MissingKeyMetadataError {
            entity: entity.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing key metadata error.
    pub fn is_missing_key_metadata(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingKeyMetadata(_))
    }
}
