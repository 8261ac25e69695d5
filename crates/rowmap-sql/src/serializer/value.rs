use super::{Formatter, Quoting, ToSql};

use rowmap_core::stmt::Value;

use std::fmt::Write;

impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Value::Null => f.dst.push_str("NULL"),
            Value::String(value) => {
                f.dst.push('\'');
                match f.serializer.quoting {
                    Quoting::Verbatim => f.dst.push_str(value),
                    Quoting::Escaped => {
                        for chunk in value.split_inclusive('\'') {
                            f.dst.push_str(chunk);
                            if chunk.ends_with('\'') {
                                f.dst.push('\'');
                            }
                        }
                    }
                }
                f.dst.push('\'');
            }
            // Writing to a `String` cannot fail
            value => {
                let _ = write!(f.dst, "{value}");
            }
        }
    }
}
