use thiserror::Error;

use crate::parse::ParseError;
use crate::ConfigError;

/// Unified error type for the fallible operations around the save filter.
///
/// The filter itself never fails; these come from validating marker
/// configuration and from strict literal parsing via
/// [`parse_literal()`](crate::parse_literal).
#[derive(Debug, Error)]
pub enum ConditionalsError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
