use super::{table, Ident, Statement};

use rowmap_core::{stmt::Value, Model, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub table: Ident,

    /// Inserted columns
    pub columns: Vec<Ident>,

    /// One value per column, in the same order
    pub values: Vec<Value>,
}

impl Insert {
    /// Inserts every column of `entity`. Keys are not required.
    pub fn new<E>(model: &Model<E>, entity: &E) -> Result<Insert> {
        model.verify()?;

        let mut columns = vec![];
        let mut values = vec![];

        for field in model.columns() {
            columns.push(Ident::from(field.column_name()));
            values.push(model.read(field, entity)?);
        }

        Ok(Insert {
            table: table(model)?,
            columns,
            values,
        })
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
