use super::{table, Filter, Ident, Statement};

use rowmap_core::{schema::Field, Model, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Selected columns
    pub columns: Vec<Ident>,

    /// Table to select from
    pub from: Ident,

    /// Row filter
    pub filter: Filter,
}

impl Select {
    pub fn all<E>(model: &Model<E>) -> Result<Select> {
        model.verify()?;

        Ok(Select {
            columns: model.columns().map(Field::column_name).map(Ident::from).collect(),
            from: table(model)?,
            filter: Filter::default(),
        })
    }

    pub fn by_key<E>(model: &Model<E>, entity: &E) -> Result<Select> {
        model.verify_keys()?;

        Ok(Select {
            filter: Filter::by_key(model, entity)?,
            ..Select::all(model)?
        })
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}
