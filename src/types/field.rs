use std::collections::HashMap;

use super::markers::{CONDITIONAL_ID, CONDITIONAL_VALUE};

/// A form field as registered with the host: its identifier, rendered
/// attributes, and whether the host marks it as required.
///
/// Built with [`FieldDefinition::new()`] and the chained setters:
///
/// ```
/// use field_conditionals::FieldDefinition;
///
/// let colour = FieldDefinition::new("shade")
///     .depends_on("colour")
///     .expects(r#"["red", "blue"]"#)
///     .attribute("class", "wide");
/// assert_eq!(colour.attributes.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDefinition {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: HashMap<String, String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,
}

impl FieldDefinition {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set a rendered attribute, replacing any previous value for `key`.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Declare `controller` as the controlling field using the default
    /// `data-conditional-id` marker.
    #[must_use]
    pub fn depends_on(self, controller: impl Into<String>) -> Self {
        self.attribute(CONDITIONAL_ID, controller)
    }

    /// Set the raw expected-value literal using the default
    /// `data-conditional-value` marker.
    #[must_use]
    pub fn expects(self, literal: impl Into<String>) -> Self {
        self.attribute(CONDITIONAL_VALUE, literal)
    }

    /// Look up a rendered attribute.
    #[must_use]
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
