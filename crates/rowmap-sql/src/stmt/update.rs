use super::{table, Assignment, Filter, Ident, Statement};

use rowmap_core::{Error, Model, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table to update
    pub table: Ident,

    /// Non-key columns and their new values
    pub assignments: Vec<Assignment>,

    /// Row filter
    pub filter: Filter,
}

impl Update {
    pub fn by_key<E>(model: &Model<E>, entity: &E) -> Result<Update> {
        model.verify_keys()?;

        let assignments = model
            .non_key_columns()
            .map(|field| {
                Ok(Assignment {
                    column: Ident::from(field.column_name()),
                    value: model.read(field, entity)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if assignments.is_empty() {
            return Err(Error::empty_assignments(&model.name));
        }

        Ok(Update {
            table: table(model)?,
            assignments,
            filter: Filter::by_key(model, entity)?,
        })
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
