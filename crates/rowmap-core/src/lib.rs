mod error;
pub use error::Error;

pub mod schema;
pub use schema::{Entity, Model};

pub mod stmt;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
