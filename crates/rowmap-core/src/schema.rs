mod entity;
pub use entity::Entity;

mod field;
pub use field::{Column, Field};

mod model;
pub use model::Model;

mod table;
pub use table::Table;

mod verify;
