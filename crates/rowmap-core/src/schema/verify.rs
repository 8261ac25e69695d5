use super::Model;
use crate::{Error, Result};

impl<E> Model<E> {
    /// Checks the metadata every statement needs: a table mapping and at
    /// least one column.
    pub fn verify(&self) -> Result<()> {
        if self.table.is_none() {
            log::trace!("entity has no table mapping; entity={}", self.name);
            return Err(Error::missing_table_metadata(&self.name));
        }

        if self.columns().next().is_none() {
            log::trace!("entity has no columns; entity={}", self.name);
            return Err(Error::missing_column_metadata(&self.name));
        }

        Ok(())
    }

    /// Checks the metadata needed to address a single row: everything
    /// [`verify`](Model::verify) checks, plus at least one key field, all of
    /// which are columns.
    pub fn verify_keys(&self) -> Result<()> {
        self.verify()?;

        let mut has_key = false;

        for field in self.keys() {
            if !field.is_column() {
                log::trace!(
                    "key field is not a column; entity={} field={}",
                    self.name,
                    field.name
                );
                return Err(Error::key_without_column(&self.name, &field.name));
            }

            has_key = true;
        }

        if !has_key {
            log::trace!("entity has no key fields; entity={}", self.name);
            return Err(Error::missing_key_metadata(&self.name));
        }

        Ok(())
    }
}
