//! Cell values.
//!
//! A [`Value`] is what a [`RowSource`](crate::RowSource) hands to the engine
//! for every cell. Formatters map values to values, highlighters and filters
//! inspect them, and the renderer finally turns them into text with
//! [`Display`](std::fmt::Display).

use std::cmp::Ordering;
use std::fmt;

/// A single table cell value.
///
/// # Example
///
/// ```
/// use prettygrid::Value;
///
/// assert_eq!(Value::from(3).to_string(), "3");
/// assert_eq!(Value::from(1.0).to_string(), "1.0");
/// assert_eq!(Value::from(f64::INFINITY).to_string(), "Inf");
/// assert_eq!(Value::from("abc").to_string(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Missing value, rendered as an empty cell.
    #[default]
    Empty,
    /// Boolean value.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Single character.
    Char(char),
    /// Text.
    Text(String),
}

impl Value {
    /// Returns `true` if this is an `Empty` value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Returns `true` for `Int`, `UInt` and `Float` values.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::UInt(_) | Value::Float(_))
    }

    /// Numeric view of the value, if it is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::UInt(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Text view of the value, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the value's type, as shown in map sub-headers.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "Nothing",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::UInt(_) => "UInt",
            Value::Float(_) => "Float",
            Value::Char(_) => "Char",
            Value::Text(_) => "String",
        }
    }

    /// Compares two values if they are of comparable kinds.
    ///
    /// Numbers compare across `Int`, `UInt` and `Float`; text, characters,
    /// booleans and empties compare among themselves. Everything else, and
    /// `NaN`, yields `None`.
    pub fn try_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Empty, Value::Empty) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::UInt(a), Value::UInt(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::UInt(b)) => Some((*a as i128).cmp(&(*b as i128))),
            (Value::UInt(a), Value::Int(b)) => Some((*a as i128).cmp(&(*b as i128))),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Float(x) if x.is_nan() => f.write_str("NaN"),
            Value::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "Inf" } else { "-Inf" })
            }
            // Debug keeps the trailing ".0" on integral floats.
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Char(c) => write!(f, "{}", c),
            Value::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::$variant(n as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    /// Keeps the shortest `f32` representation, so `0.1f32` stays `0.1`.
    fn from(x: f32) -> Self {
        let shortest = format!("{:?}", x).parse().unwrap_or(f64::from(x));
        Value::Float(shortest)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Empty)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Empty,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::Text(s.clone()),
            other => Value::Text(other.to_string()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::String(s) => Value::Text(s),
            other => Value::from(&other),
        }
    }
}
