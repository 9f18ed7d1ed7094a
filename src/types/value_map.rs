use std::collections::HashMap;

use super::Value;

/// Values proposed for persistence during one save, keyed by field id.
///
/// Owned by the host's save pipeline; the save filter only ever removes
/// entries from it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValueMap {
    data: HashMap<String, Value>,
}

impl ValueMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value for a field id.
    #[must_use]
    pub fn set(mut self, field_id: &str, value: impl Into<Value>) -> Self {
        self.insert(field_id, value.into());
        self
    }

    /// Insert a value (mutable reference version).
    pub fn insert(&mut self, field_id: &str, value: Value) {
        self.data.insert(field_id.to_owned(), value);
    }

    #[must_use]
    pub fn get(&self, field_id: &str) -> Option<&Value> {
        self.data.get(field_id)
    }

    /// The value for `field_id` if it is set and not null.
    #[must_use]
    pub fn get_set(&self, field_id: &str) -> Option<&Value> {
        self.get(field_id).filter(|v| !matches!(v, Value::Null))
    }

    pub fn remove(&mut self, field_id: &str) -> Option<Value> {
        self.data.remove(field_id)
    }

    #[must_use]
    pub fn contains_key(&self, field_id: &str) -> bool {
        self.data.contains_key(field_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Hand the entries back to the host for persistence.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, Value> {
        self.data
    }
}

impl From<HashMap<String, Value>> for ValueMap {
    fn from(data: HashMap<String, Value>) -> Self {
        Self { data }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
