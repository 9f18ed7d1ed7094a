use super::error::ConfigError;

/// Attribute key the client runtime reads to find the controlling field.
pub const CONDITIONAL_ID: &str = "data-conditional-id";

/// Attribute key the client runtime reads for the expected value.
pub const CONDITIONAL_VALUE: &str = "data-conditional-value";

/// The pair of attribute keys that declare a conditional on a field.
///
/// The key names are shared with the client runtime that toggles fields in
/// the rendered form, so both sides must be configured identically.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMarkers"))]
pub struct Markers {
    conditional_id: String,
    conditional_value: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            conditional_id: CONDITIONAL_ID.to_owned(),
            conditional_value: CONDITIONAL_VALUE.to_owned(),
        }
    }
}

impl Markers {
    /// Start from the default keys and override them selectively.
    ///
    /// # Example
    ///
    /// ```
    /// use field_conditionals::Markers;
    ///
    /// let markers = Markers::builder()
    ///     .conditional_id("data-show-if")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(markers.conditional_id(), "data-show-if");
    /// assert_eq!(markers.conditional_value(), "data-conditional-value");
    /// ```
    #[must_use]
    pub fn builder() -> MarkersBuilder {
        MarkersBuilder::default()
    }

    /// Key naming the controlling field.
    #[must_use]
    pub fn conditional_id(&self) -> &str {
        &self.conditional_id
    }

    /// Key holding the expected value literal.
    #[must_use]
    pub fn conditional_value(&self) -> &str {
        &self.conditional_value
    }
}

/// Builder for [`Markers`]. Unset keys keep their defaults.
#[derive(Debug, Default)]
pub struct MarkersBuilder {
    conditional_id: Option<String>,
    conditional_value: Option<String>,
}

impl MarkersBuilder {
    #[must_use]
    pub fn conditional_id(mut self, key: impl Into<String>) -> Self {
        self.conditional_id = Some(key.into());
        self
    }

    #[must_use]
    pub fn conditional_value(mut self, key: impl Into<String>) -> Self {
        self.conditional_value = Some(key.into());
        self
    }

    /// Validate and produce the [`Markers`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a key is empty or both keys are the same.
    pub fn build(self) -> Result<Markers, ConfigError> {
        let conditional_id = self
            .conditional_id
            .unwrap_or_else(|| CONDITIONAL_ID.to_owned());
        let conditional_value = self
            .conditional_value
            .unwrap_or_else(|| CONDITIONAL_VALUE.to_owned());

        if conditional_id.is_empty() {
            return Err(ConfigError::EmptyMarker {
                marker: "conditional_id",
            });
        }
        if conditional_value.is_empty() {
            return Err(ConfigError::EmptyMarker {
                marker: "conditional_value",
            });
        }
        if conditional_id == conditional_value {
            return Err(ConfigError::DuplicateMarker {
                key: conditional_id,
            });
        }

        Ok(Markers {
            conditional_id,
            conditional_value,
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMarkers {
    conditional_id: Option<String>,
    conditional_value: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMarkers> for Markers {
    type Error = ConfigError;

    fn try_from(raw: RawMarkers) -> Result<Self, Self::Error> {
        let mut builder = Markers::builder();
        if let Some(key) = raw.conditional_id {
            builder = builder.conditional_id(key);
        }
        if let Some(key) = raw.conditional_value {
            builder = builder.conditional_value(key);
        }
        builder.build()
    }
}
