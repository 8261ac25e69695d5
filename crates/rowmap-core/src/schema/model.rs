use super::{Field, Table};
use crate::{stmt::Value, Error, Result};

/// Mapping metadata of an entity type.
#[derive(Debug)]
pub struct Model<E> {
    /// Fully-qualified name of the entity type
    pub name: String,

    /// Table mapping, if the type is mapped to a table
    pub table: Option<Table>,

    /// Declared fields, in declaration order
    pub fields: Vec<Field<E>>,
}

impl<E> Model<E> {
    pub fn new(name: impl Into<String>) -> Model<E> {
        Model {
            name: name.into(),
            table: None,
            fields: vec![],
        }
    }

    pub fn table(mut self, table: Table) -> Model<E> {
        self.table = Some(table);
        self
    }

    pub fn field(mut self, field: Field<E>) -> Model<E> {
        self.fields.push(field);
        self
    }

    /// The name of the table the entity maps to.
    ///
    /// Returns `None` only if the type carries no table mapping.
    pub fn table_name(&self) -> Option<&str> {
        let table = self.table.as_ref()?;
        Some(table.explicit_name().unwrap_or(&self.name))
    }

    /// Fields mapped to a column, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &Field<E>> + '_ {
        self.fields.iter().filter(|field| field.is_column())
    }

    /// Key fields, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &Field<E>> + '_ {
        self.fields.iter().filter(|field| field.is_key())
    }

    /// Column fields that are not keys, in declaration order.
    pub fn non_key_columns(&self) -> impl Iterator<Item = &Field<E>> + '_ {
        self.columns().filter(|field| !field.is_key())
    }

    /// Reads the value of a column field from an instance.
    pub fn read(&self, field: &Field<E>, entity: &E) -> Result<Value> {
        let Some(column) = &field.column else {
            return Err(Error::value_access(
                &self.name,
                &field.name,
                "field is not mapped to a column",
            ));
        };

        let value = (column.value)(entity);

        if value.is_null() && !column.nullable {
            return Err(Error::value_access(
                &self.name,
                &field.name,
                format!("non-nullable {:?} column produced NULL", column.ty),
            ));
        }

        if !value.is_a(column.ty) {
            return Err(Error::value_access(
                &self.name,
                &field.name,
                format!("expected {:?}, got {value:?}", column.ty),
            ));
        }

        Ok(value)
    }
}
