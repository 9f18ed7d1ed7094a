mod error;
mod extract;
mod filter;
mod parse;
mod types;

pub use error::ConditionalsError;
pub use parse::{parse_literal, try_parse_literal, ParseError};
pub use types::{
    extract, filter_values_to_save, ConditionRule, ConfigError, ExpectedValue, FieldDefinition,
    FilterReport, Markers, MarkersBuilder, Removal, RemovalReason, SaveFilter, Value, ValueMap,
    CONDITIONAL_ID, CONDITIONAL_VALUE,
};
