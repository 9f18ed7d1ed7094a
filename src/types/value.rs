use std::collections::BTreeMap;
use std::fmt;

/// Dynamic value model shared by submitted form values and parsed
/// expected-value literals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// An explicit null. Treated as "not set" by the save filter.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A string-keyed map of values.
    Map(BTreeMap<String, Value>),
}

/// Numeric view of a value used by loose comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }

    #[allow(clippy::float_cmp)]
    fn loose_eq(self, other: Numeric) -> bool {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl Value {
    /// Host truthiness: `null`, `false`, `0`, `0.0`, `""`, `"0"` and empty
    /// collections are falsy, everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !(s.is_empty() || s == "0"),
            Value::List(items) => !items.is_empty(),
            Value::Map(entries) => !entries.is_empty(),
        }
    }

    /// Type-coercing equality matching the host's `==` operator.
    ///
    /// Coercion rules, applied symmetrically:
    ///
    /// - `null` equals `null`, `false`, `""`, `0`, `0.0` and empty collections.
    /// - A boolean compares against the other side's truthiness, so
    ///   `true == 1`, `true == "yes"` and `false == "0"` all hold.
    /// - Numbers compare numerically; integers widen to floats when mixed.
    /// - A number and a string compare numerically when the string is a
    ///   numeric string (`"1" == 1`, `" 1.0" == 1`), otherwise they differ.
    /// - Two strings compare numerically when both are numeric strings
    ///   (`"10" == "1e1"`), otherwise byte-for-byte.
    /// - Lists compare element-wise, maps key-wise; any other pairing is unequal.
    #[must_use]
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), b) | (b, Value::Bool(a)) => *a == b.is_truthy(),
            (Value::Null, other) | (other, Value::Null) => !other.is_truthy_for_null(),
            (Value::String(a), Value::String(b)) => {
                match (crate::parse::parse_numeric(a), crate::parse::parse_numeric(b)) {
                    (Some(x), Some(y)) => x.loose_eq(y),
                    _ => a == b,
                }
            }
            (Value::String(s), number) | (number, Value::String(s)) => {
                match (number.numeric(), crate::parse::parse_numeric(s)) {
                    (Some(x), Some(y)) => x.loose_eq(y),
                    _ => false,
                }
            }
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|other| v.loose_eq(other)))
            }
            (a, b) => match (a.numeric(), b.numeric()) {
                (Some(x), Some(y)) => x.loose_eq(y),
                _ => false,
            },
        }
    }

    /// Whether a value differs from `null` under loose comparison. Only
    /// strings diverge from plain truthiness here: `"0" != null`.
    fn is_truthy_for_null(&self) -> bool {
        match self {
            Value::String(s) => !s.is_empty(),
            other => other.is_truthy(),
        }
    }

    fn numeric(&self) -> Option<Numeric> {
        match self {
            Value::Int(i) => Some(Numeric::Int(*i)),
            Value::Float(f) => Some(Numeric::Float(*f)),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{key}\": {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
