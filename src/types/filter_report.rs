use std::fmt;
use std::time::Duration;

use super::value::Value;

/// Why a conditional field's value was stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// The controlling field has no value, or a null one.
    ControllerAbsent,
    /// The controlling value is not a member of the expected set.
    NotInSet,
    /// The controlling value does not equal the expected scalar.
    ValueMismatch,
    /// No expected value was declared and the controlling value is falsy.
    Falsy,
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RemovalReason::ControllerAbsent => "controlling field absent",
            RemovalReason::NotInSet => "controlling value not in expected set",
            RemovalReason::ValueMismatch => "controlling value does not match",
            RemovalReason::Falsy => "controlling value is falsy",
        };
        f.write_str(text)
    }
}

/// A conditional field whose condition failed during a save pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub field_id: String,
    pub controlling_field_id: String,
    pub reason: RemovalReason,
    /// The stripped value, or `None` if nothing had been submitted for the field.
    pub value: Option<Value>,
}

/// Detailed report returned by
/// [`SaveFilter::filter_detailed()`](super::SaveFilter::filter_detailed).
///
/// Lists the conditional fields whose condition failed (in field order),
/// those that were kept, and the wall-clock duration of the pass.
#[derive(Debug, Clone)]
#[must_use]
pub struct FilterReport {
    removed: Vec<Removal>,
    kept: Vec<String>,
    duration: Duration,
}

impl FilterReport {
    pub(crate) fn new(removed: Vec<Removal>, kept: Vec<String>, duration: Duration) -> Self {
        Self {
            removed,
            kept,
            duration,
        }
    }

    /// Conditional fields that failed their condition, in field order.
    #[must_use]
    pub fn removed(&self) -> &[Removal] {
        &self.removed
    }

    /// Ids of conditional fields whose condition held, in field order.
    #[must_use]
    pub fn kept(&self) -> &[String] {
        &self.kept
    }

    /// Whether `field_id` failed its condition in this pass.
    #[must_use]
    pub fn was_removed(&self, field_id: &str) -> bool {
        self.removed.iter().any(|r| r.field_id == field_id)
    }

    /// Wall-clock duration of the pass.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let removed: Vec<&str> = self.removed.iter().map(|r| r.field_id.as_str()).collect();
        write!(f, "removed: [{}]", removed.join(", "))?;
        write!(f, ", kept: [{}]", self.kept.join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
