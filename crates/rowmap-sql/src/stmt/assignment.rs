use super::Ident;

use rowmap_core::stmt::Value;

/// `<column> = <value>` in an `UPDATE ... SET` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: Ident,
    pub value: Value,
}
