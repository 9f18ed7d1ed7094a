use std::fmt;

use super::value::Value;

/// What a controlling field's value must match for the dependent field to
/// be kept.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedValue {
    /// The literal parsed to an array: the controlling value must loosely
    /// equal one of the members.
    Set(Vec<Value>),
    /// Any other literal, or the raw attribute text when it did not parse:
    /// the controlling value must loosely equal it.
    Scalar(Value),
}

impl From<Value> for ExpectedValue {
    fn from(value: Value) -> Self {
        match value {
            Value::List(items) => ExpectedValue::Set(items),
            other => ExpectedValue::Scalar(other),
        }
    }
}

impl fmt::Display for ExpectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedValue::Set(items) => {
                write!(f, "one of [")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            ExpectedValue::Scalar(value) => write!(f, "{value}"),
        }
    }
}

/// A conditional extracted from a field's attributes.
///
/// Derived on demand from a [`FieldDefinition`](super::FieldDefinition) by
/// [`SaveFilter::extract()`](super::SaveFilter::extract) and never cached.
/// `expected_value` is `None` when the field only requires its controller to
/// be truthy.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionRule {
    pub controlling_field_id: String,
    pub expected_value: Option<ExpectedValue>,
}

impl fmt::Display for ConditionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expected_value {
            Some(expected) => write!(f, "{} == {expected}", self.controlling_field_id),
            None => write!(f, "{} is truthy", self.controlling_field_id),
        }
    }
}
