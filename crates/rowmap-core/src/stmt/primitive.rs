use super::{Type, Value};

/// A Rust type that can be stored in a single column.
///
/// Implemented for the scalar types rowmap knows how to render. Column fields
/// of an entity must be of a `Primitive` type; `Option<T>` makes the column
/// nullable.
pub trait Primitive {
    /// The column type values of this Rust type are stored as.
    const TYPE: Type;

    /// Whether the column accepts `NULL`.
    const NULLABLE: bool = false;

    /// Reads the current value.
    fn to_value(&self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $t:ty => $ty:ident ),* ) => {
        $(
            impl Primitive for $t {
                const TYPE: Type = Type::$ty;

                fn to_value(&self) -> Value {
                    Value::$ty(*self)
                }
            }
        )*
    };
}

impl_primitive!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64
);

impl Primitive for String {
    const TYPE: Type = Type::String;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for &str {
    const TYPE: Type = Type::String;

    fn to_value(&self) -> Value {
        Value::String((*self).to_string())
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}
