use super::Model;

/// A record type that maps to a database table.
///
/// Usually implemented with `#[derive(Entity)]`, but a hand-written
/// implementation that builds the [`Model`] directly works the same way.
pub trait Entity: Sized {
    /// Returns the mapping metadata for this type.
    ///
    /// Called on every statement generation; implementations should build
    /// the descriptor from static information only.
    fn schema() -> Model<Self>;
}
