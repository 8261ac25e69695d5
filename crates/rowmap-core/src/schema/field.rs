use crate::stmt::{Primitive, Type, Value};

use std::fmt;

/// A declared field of an entity type.
pub struct Field<E> {
    /// The field's name in the Rust struct
    pub name: String,

    /// True if the field identifies the row (`#[key]`)
    pub key: bool,

    /// Column mapping, present if the field is persisted (`#[column]`)
    pub column: Option<Column<E>>,
}

/// Column mapping of a single field.
pub struct Column<E> {
    /// Explicit column name. When absent or empty, the field name is used.
    pub name: Option<String>,

    /// Declared type of the field's values
    pub ty: Type,

    /// Whether the field may hold `NULL`
    pub nullable: bool,

    /// Reads the field's current value from an instance
    pub value: fn(&E) -> Value,
}

impl<E> Field<E> {
    /// A field that is neither a column nor a key.
    pub fn new(name: impl Into<String>) -> Field<E> {
        Field {
            name: name.into(),
            key: false,
            column: None,
        }
    }

    pub fn key(mut self) -> Field<E> {
        self.key = true;
        self
    }

    pub fn column(mut self, column: Column<E>) -> Field<E> {
        self.column = Some(column);
        self
    }

    pub fn is_column(&self) -> bool {
        self.column.is_some()
    }

    pub fn is_key(&self) -> bool {
        self.key
    }

    /// The name of the column this field maps to.
    pub fn column_name(&self) -> &str {
        self.column
            .as_ref()
            .and_then(|column| column.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }
}

impl<E> Column<E> {
    /// Column whose type and nullability come from the Rust type `T`.
    pub fn of<T: Primitive>(value: fn(&E) -> Value) -> Column<E> {
        Column {
            name: None,
            ty: T::TYPE,
            nullable: T::NULLABLE,
            value,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Column<E> {
        self.name = Some(name.into());
        self
    }
}

impl<E> fmt::Debug for Field<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("column", &self.column)
            .finish()
    }
}

impl<E> fmt::Debug for Column<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("nullable", &self.nullable)
            .finish_non_exhaustive()
    }
}
