/// Table mapping metadata attached to an entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Explicit table name. When absent or empty, the entity's
    /// fully-qualified type name is used.
    pub name: Option<String>,
}

impl Table {
    pub fn named(name: impl Into<String>) -> Table {
        Table {
            name: Some(name.into()),
        }
    }

    /// Returns the explicit name, treating an empty override as absent.
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
