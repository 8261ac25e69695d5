//! Generate literal SQL statements from annotated record types.
//!
//! ```
//! #[derive(rowmap::Entity)]
//! #[table = "sites"]
//! struct Location {
//!     #[key]
//!     #[column]
//!     longitude: i64,
//!
//!     #[key]
//!     #[column]
//!     latitude: i64,
//!
//!     #[column]
//!     name: String,
//!
//!     #[column("visitors")]
//!     visitors_per_year: Option<i64>,
//! }
//!
//! let moon = Location {
//!     longitude: 10,
//!     latitude: 20,
//!     name: "Moon".to_string(),
//!     visitors_per_year: None,
//! };
//!
//! assert_eq!(
//!     rowmap::update(&moon).unwrap(),
//!     "UPDATE sites SET name = 'Moon', visitors = NULL WHERE longitude = 10 AND latitude = 20;"
//! );
//! ```

pub use rowmap_core::{schema, stmt, Entity, Error, Model, Result};
pub use rowmap_macros::Entity;
pub use rowmap_sql::{Serializer, Statement};

/// `SELECT <columns> FROM <table>;`
pub fn select_all<E: Entity>() -> Result<String> {
    Serializer::default().select_all::<E>()
}

/// `SELECT <columns> FROM <table> WHERE <keys>;`
pub fn select_one<E: Entity>(entity: &E) -> Result<String> {
    Serializer::default().select_one(entity)
}

/// `INSERT INTO <table> (<columns>) VALUES (<values>);`
pub fn insert<E: Entity>(entity: &E) -> Result<String> {
    Serializer::default().insert(entity)
}

/// `UPDATE <table> SET <non-key columns> WHERE <keys>;`
pub fn update<E: Entity>(entity: &E) -> Result<String> {
    Serializer::default().update(entity)
}

/// `DELETE FROM <table> WHERE <keys>;`
pub fn delete<E: Entity>(entity: &E) -> Result<String> {
    Serializer::default().delete(entity)
}

#[doc(hidden)]
pub mod codegen_support {
    pub use rowmap_core::{schema, stmt, Entity, Model};
}
