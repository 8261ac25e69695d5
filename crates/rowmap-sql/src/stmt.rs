mod assignment;
pub use assignment::Assignment;

mod delete;
pub use delete::Delete;

mod filter;
pub use filter::{Condition, Filter};

mod ident;
pub use ident::Ident;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

use rowmap_core::{Model, Result};

/// A statement with every table name, column name and value resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    /// `SELECT` of every column of every row.
    pub fn select_all<E>(model: &Model<E>) -> Result<Statement> {
        Select::all(model).map(Statement::from)
    }

    /// `SELECT` of every column of the row identified by the entity's keys.
    pub fn select_one<E>(model: &Model<E>, entity: &E) -> Result<Statement> {
        Select::by_key(model, entity).map(Statement::from)
    }

    /// `INSERT` of the entity's column values.
    pub fn insert<E>(model: &Model<E>, entity: &E) -> Result<Statement> {
        Insert::new(model, entity).map(Statement::from)
    }

    /// `UPDATE` of the entity's non-key columns, matched by its keys.
    pub fn update<E>(model: &Model<E>, entity: &E) -> Result<Statement> {
        Update::by_key(model, entity).map(Statement::from)
    }

    /// `DELETE` of the row identified by the entity's keys.
    pub fn delete<E>(model: &Model<E>, entity: &E) -> Result<Statement> {
        Delete::by_key(model, entity).map(Statement::from)
    }
}

/// Resolves the table name of an already verified model.
fn table<E>(model: &Model<E>) -> Result<Ident> {
    match model.table_name() {
        Some(name) => Ok(Ident::from(name)),
        None => Err(rowmap_core::Error::missing_table_metadata(&model.name)),
    }
}
