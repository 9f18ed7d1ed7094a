mod error;
mod grammar;

pub use error::ParseError;

use crate::types::Numeric;
use crate::Value;

/// Parse a literal written in JSON interchange syntax into a [`Value`].
///
/// Arrays become [`Value::List`], objects [`Value::Map`]. Integers that do not
/// fit in an `i64` are parsed as floats.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a single well-formed literal.
pub fn parse_literal(input: &str) -> Result<Value, ParseError> {
    use winnow::Parser;
    grammar::literal
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}

/// Best-effort variant of [`parse_literal`]: the error path hands back the
/// original input instead of a diagnostic.
///
/// ```
/// use field_conditionals::{try_parse_literal, Value};
///
/// assert_eq!(try_parse_literal("[1, 2]"), Ok(Value::from(vec![1_i64, 2])));
/// assert_eq!(try_parse_literal("red"), Err("red"));
/// ```
///
/// # Errors
///
/// Returns the input unchanged when it is not a well-formed literal.
pub fn try_parse_literal(input: &str) -> Result<Value, &str> {
    parse_literal(input).map_err(|_| input)
}

/// Interpret `input` as a numeric string, the way the host does before
/// comparing it against a number.
pub(crate) fn parse_numeric(input: &str) -> Option<Numeric> {
    use winnow::Parser;
    grammar::numeric_string.parse(input).ok()
}
