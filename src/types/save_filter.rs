use std::fmt;

use super::error::ConfigError;
use super::field::FieldDefinition;
use super::filter_report::FilterReport;
use super::markers::Markers;
use super::rule::ConditionRule;
use super::value_map::ValueMap;

/// Strips submitted values of conditional fields whose condition does not
/// hold, before the host persists them.
///
/// Holds only the marker configuration, so one instance can be shared
/// behind `Arc` by every request handler.
///
/// # Example
///
/// ```
/// use field_conditionals::{FieldDefinition, SaveFilter, ValueMap};
///
/// let fields = vec![
///     FieldDefinition::new("has_pet"),
///     FieldDefinition::new("pet_name").depends_on("has_pet"),
/// ];
/// let mut values = ValueMap::new().set("has_pet", "").set("pet_name", "Rex");
///
/// SaveFilter::new().filter_values_to_save(&fields, &mut values);
/// assert!(!values.contains_key("pet_name"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SaveFilter {
    markers: Markers,
}

impl SaveFilter {
    /// A filter using the default `data-conditional-id` /
    /// `data-conditional-value` markers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_markers(markers: Markers) -> Self {
        Self { markers }
    }

    /// Build a filter with custom marker keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a key is empty or both keys are the same.
    pub fn with_marker_keys(
        conditional_id: &str,
        conditional_value: &str,
    ) -> Result<Self, ConfigError> {
        let markers = Markers::builder()
            .conditional_id(conditional_id)
            .conditional_value(conditional_value)
            .build()?;
        Ok(Self::with_markers(markers))
    }

    #[must_use]
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Extract the conditional declared on `field`, if any.
    ///
    /// The expected-value literal is parsed best-effort: text that is not a
    /// well-formed literal is matched verbatim as a string.
    #[must_use]
    pub fn extract(&self, field: &FieldDefinition) -> Option<ConditionRule> {
        crate::extract::extract(field, &self.markers)
    }

    /// Remove from `values` every conditional field whose condition fails.
    ///
    /// Fields are visited in order against the live map, so a controller
    /// stripped earlier in the pass reads as absent for later dependents.
    /// Unconditional fields are never touched and nothing is ever inserted.
    pub fn filter_values_to_save(&self, fields: &[FieldDefinition], values: &mut ValueMap) {
        crate::filter::filter_values(fields, values, &self.markers);
    }

    /// Same as [`filter_values_to_save()`](Self::filter_values_to_save), also
    /// reporting which fields were stripped and why.
    pub fn filter_detailed(&self, fields: &[FieldDefinition], values: &mut ValueMap) -> FilterReport {
        crate::filter::filter_detailed(fields, values, &self.markers)
    }

    /// Whether the rendered form needs the companion client script: true
    /// when any field is required or declares a conditional.
    #[must_use]
    pub fn needs_client_runtime(&self, fields: &[FieldDefinition]) -> bool {
        crate::extract::needs_client_runtime(fields, &self.markers)
    }
}

impl fmt::Display for SaveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SaveFilter({}, {})",
            self.markers.conditional_id(),
            self.markers.conditional_value(),
        )
    }
}

/// Extract a field's conditional using the default markers.
#[must_use]
pub fn extract(field: &FieldDefinition) -> Option<ConditionRule> {
    SaveFilter::new().extract(field)
}

/// Filter `values` against `fields` using the default markers.
pub fn filter_values_to_save(fields: &[FieldDefinition], values: &mut ValueMap) {
    SaveFilter::new().filter_values_to_save(fields, values);
}
