use super::Error;

/// Error when an update is requested for an entity whose columns are all
/// keys, leaving nothing to assign in the `SET` clause.
#[derive(Debug)]
pub(super) struct EmptyAssignmentsError {
    entity: Box<str>,
}

impl std::error::Error for EmptyAssignmentsError {}

impl core::fmt::Display for EmptyAssignmentsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "nothing to update: {}", self.entity)
    }
}

impl Error {
    /// Creates an error for an update with no assignable columns.
    pub fn empty_assignments(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmptyAssignments(EmptyAssignmentsError {
            entity: entity.into().into(),
        }))
    }

    /// Returns `true` if this error is an empty assignments error.
    pub fn is_empty_assignments(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyAssignments(_))
    }
}
