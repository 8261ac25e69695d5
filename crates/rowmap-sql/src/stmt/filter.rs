use super::Ident;

use rowmap_core::{stmt::Value, Model, Result};

/// `WHERE` clause matching a row by its key columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    /// Conditions joined by `AND`. An empty filter matches every row.
    pub conditions: Vec<Condition>,
}

/// `<column> = <value>`
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: Ident,
    pub value: Value,
}

impl Filter {
    /// Builds the key predicate for `entity`, one condition per key field in
    /// declaration order.
    pub fn by_key<E>(model: &Model<E>, entity: &E) -> Result<Filter> {
        let conditions = model
            .keys()
            .map(|field| {
                Ok(Condition {
                    column: Ident::from(field.column_name()),
                    value: model.read(field, entity)?,
                })
            })
            .collect::<Result<_>>()?;

        Ok(Filter { conditions })
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
