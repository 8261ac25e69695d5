use super::{Comma, Delimited, Formatter, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(&self.columns);
        let table = &self.from;
        let filter = &self.filter;

        fmt!(f, "SELECT " columns " FROM " table filter);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let columns = Comma(&self.columns);
        let values = Comma(&self.values);

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let assignments = Comma(&self.assignments);
        let filter = &self.filter;

        fmt!(f, "UPDATE " table " SET " assignments filter);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.from;
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " table filter);
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if !self.is_empty() {
            let conditions = Delimited(&self.conditions, " AND ");

            fmt!(f, " WHERE " conditions);
        }
    }
}

impl ToSql for &stmt::Condition {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = &self.column;
        let value = &self.value;

        fmt!(f, column " = " value);
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = &self.column;
        let value = &self.value;

        fmt!(f, column " = " value);
    }
}
