use super::{table, Filter, Ident, Statement};

use rowmap_core::{Model, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Table to delete from
    pub from: Ident,

    /// Row filter
    pub filter: Filter,
}

impl Delete {
    pub fn by_key<E>(model: &Model<E>, entity: &E) -> Result<Delete> {
        model.verify_keys()?;

        Ok(Delete {
            from: table(model)?,
            filter: Filter::by_key(model, entity)?,
        })
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
