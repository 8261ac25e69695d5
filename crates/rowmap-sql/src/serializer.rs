#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod quoting;
use quoting::Quoting;

// Fragment serializers
mod statement;
mod value;

use crate::stmt::Statement;

use rowmap_core::{Entity, Result};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    /// How string literals are rendered.
    quoting: Quoting,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');

        log::debug!("serialized statement; sql={ret}");
        ret
    }

    /// `SELECT <columns> FROM <table>;`
    pub fn select_all<E: Entity>(&self) -> Result<String> {
        let model = E::schema();
        Ok(self.serialize(&Statement::select_all(&model)?))
    }

    /// `SELECT <columns> FROM <table> WHERE <keys>;`
    pub fn select_one<E: Entity>(&self, entity: &E) -> Result<String> {
        let model = E::schema();
        Ok(self.serialize(&Statement::select_one(&model, entity)?))
    }

    /// `INSERT INTO <table> (<columns>) VALUES (<values>);`
    pub fn insert<E: Entity>(&self, entity: &E) -> Result<String> {
        let model = E::schema();
        Ok(self.serialize(&Statement::insert(&model, entity)?))
    }

    /// `UPDATE <table> SET <assignments> WHERE <keys>;`
    pub fn update<E: Entity>(&self, entity: &E) -> Result<String> {
        let model = E::schema();
        Ok(self.serialize(&Statement::update(&model, entity)?))
    }

    /// `DELETE FROM <table> WHERE <keys>;`
    pub fn delete<E: Entity>(&self, entity: &E) -> Result<String> {
        let model = E::schema();
        Ok(self.serialize(&Statement::delete(&model, entity)?))
    }
}
