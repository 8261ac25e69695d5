use super::Error;

/// Error when reading a column value from an entity instance produced
/// something the column cannot hold.
///
/// Accessors are generated alongside the column metadata, so this indicates
/// a hand-written descriptor whose accessor disagrees with its declared type.
#[derive(Debug)]
pub(super) struct ValueAccessError {
    entity: Box<str>,
    field: Box<str>,
    detail: Box<str>,
}

impl std::error::Error for ValueAccessError {}

impl core::fmt::Display for ValueAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "value access failed: {}.{}: {}",
            self.entity, self.field, self.detail
        )
    }
}

impl Error {
    /// Creates a value access error.
    pub fn value_access(
        entity: impl Into<String>,
        field: impl Into<String>,
        detail: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::ValueAccess(ValueAccessError {
            entity: entity.into().into(),
            field: field.into().into(),
            detail: detail.into().into(),
        }))
    }

    /// Returns `true` if this error is a value access error.
    pub fn is_value_access(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ValueAccess(_))
    }
}
