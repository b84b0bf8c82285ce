use core::fmt;

use serde::Serialize;

use crate::error::Result;

/// A single console argument.
///
/// Console calls are variadic and untyped, so every argument is carried as
/// one of these variants. `Display` yields the display string used by `%s`
/// and by the printer; [`Value::inspect`] yields the structural form used by
/// `%o`, `%O` and `dir`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absent value
    Undefined,
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Str(String),
    /// Structured data (objects, arrays, nested values)
    Structured(serde_json::Value),
    /// Anything else, already rendered by the caller
    Opaque(String),
}

impl Value {
    /// Serialize any `Serialize` type into a structured value.
    /// # Errors
    /// Returns [`ConsoleError::Encode`](crate::ConsoleError::Encode) if serialization fails.
    pub fn structured<T: Serialize + ?Sized>(v: &T) -> Result<Self> {
        Ok(Self::Structured(serde_json::to_value(v)?))
    }

    /// Wrap a value through its `Debug` representation.
    pub fn opaque<T: fmt::Debug + ?Sized>(v: &T) -> Self {
        Self::Opaque(format!("{v:?}"))
    }

    /// Returns `true` for textual values.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Borrow the text of a textual value.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Generic structural representation: strings quoted, structured data as compact JSON.
    #[must_use]
    pub fn inspect(&self) -> String {
        match self {
            Self::Str(s) => serde_json::Value::String(s.clone()).to_string(),
            Self::Structured(v) => v.to_string(),
            other => other.to_string(),
        }
    }

    /// Richest available representation: structured data as indented JSON.
    #[must_use]
    pub fn inspect_pretty(&self) -> String {
        match self {
            Self::Structured(v) => {
                serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
            }
            other => other.inspect(),
        }
    }
}

pub struct FloatDisplay(pub f64);

impl fmt::Display for FloatDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            f.write_str("NaN")
        } else if x.is_infinite() {
            f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            write!(f, "{x}")
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{}", FloatDisplay(*x)),
            Self::Str(s) | Self::Opaque(s) => f.write_str(s),
            Self::Structured(serde_json::Value::String(s)) => f.write_str(s),
            Self::Structured(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! from_lossless_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Self::Int(i64::from(i))
            }
        }
    )*};
}
from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! from_wide_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(i: $t) -> Self {
                i64::try_from(i).map_or_else(|_| Self::Opaque(i.to_string()), Self::Int)
            }
        }
    )*};
}
from_wide_int!(u64, usize, isize, i128, u128);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Structured(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_forms() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::from(None::<i32>).to_string(), "null");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(2.0).to_string(), "2");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::from(json!("plain")).to_string(), "plain");
        assert_eq!(Value::from(json!({"a": 1})).to_string(), r#"{"a":1}"#);
    }

    #[test]
    fn inspect_quotes_text() {
        assert_eq!(Value::from("a\"b").inspect(), r#""a\"b""#);
        assert_eq!(Value::from(7).inspect(), "7");
        assert_eq!(
            Value::from(json!([1, 2])).inspect_pretty(),
            "[\n  1,\n  2\n]"
        );
    }

    #[test]
    fn wide_integers_keep_exact_digits() {
        assert_eq!(Value::from(5_u64), Value::Int(5));
        assert_eq!(Value::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Value::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(Value::from(i128::MIN).inspect(), i128::MIN.to_string());
    }
}
