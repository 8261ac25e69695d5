mod empty_assignments;
mod key_without_column;
mod missing_column_metadata;
mod missing_key_metadata;
mod missing_table_metadata;
mod value_access;

use empty_assignments::EmptyAssignmentsError;
use key_without_column::KeyWithoutColumnError;
use missing_column_metadata::MissingColumnMetadataError;
use missing_key_metadata::MissingKeyMetadataError;
use missing_table_metadata::MissingTableMetadataError;
use std::sync::Arc;
use value_access::ValueAccessError;

/// An error that can occur while generating a statement.
///
/// Every error is fatal for the statement being generated: no partial
/// statement text is ever returned alongside it.
#[derive(Clone)]
pub struct Error {
    kind: Arc<ErrorKind>,
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", self.kind()).finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    MissingTableMetadata(MissingTableMetadataError),
    MissingColumnMetadata(MissingColumnMetadataError),
    MissingKeyMetadata(MissingKeyMetadataError),
    KeyWithoutColumn(KeyWithoutColumnError),
    ValueAccess(ValueAccessError),
    EmptyAssignments(EmptyAssignmentsError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            MissingTableMetadata(err) => core::fmt::Display::fmt(err, f),
            MissingColumnMetadata(err) => core::fmt::Display::fmt(err, f),
            MissingKeyMetadata(err) => core::fmt::Display::fmt(err, f),
            KeyWithoutColumn(err) => core::fmt::Display::fmt(err, f),
            ValueAccess(err) => core::fmt::Display::fmt(err, f),
            EmptyAssignments(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind: Arc::new(kind),
        }
    }
}
