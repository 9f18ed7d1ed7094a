mod error;
mod field;
mod filter_report;
mod markers;
mod rule;
mod save_filter;
mod value;
mod value_map;

pub use error::ConfigError;
pub use field::FieldDefinition;
pub use filter_report::{FilterReport, Removal, RemovalReason};
pub use markers::{Markers, MarkersBuilder, CONDITIONAL_ID, CONDITIONAL_VALUE};
pub use rule::{ConditionRule, ExpectedValue};
pub use save_filter::{extract, filter_values_to_save, SaveFilter};
pub(crate) use value::Numeric;
pub use value::Value;
pub use value_map::ValueMap;
