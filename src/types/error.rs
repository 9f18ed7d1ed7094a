use thiserror::Error;

/// Errors raised while building a [`Markers`](super::Markers) configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("marker attribute '{marker}' must not be empty")]
    EmptyMarker { marker: &'static str },

    #[error("controlling-field and expected-value markers are both '{key}'")]
    DuplicateMarker { key: String },
}
