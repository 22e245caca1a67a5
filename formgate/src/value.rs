//! Field values as read out of a form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The current value of one field.
///
/// A field backed by several controls (a checkbox group, a multi-select)
/// reads as a [`FieldValue::Selection`]. A field with no readable value at
/// all reads as [`FieldValue::Missing`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value (unchecked checkbox, no radio selected, unknown field).
    #[default]
    Missing,
    /// A single text value.
    Text(String),
    /// The values of every selected item.
    Selection(Vec<String>),
}

impl FieldValue {
    /// True for a missing value, an empty string or an empty selection.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(text) => text.is_empty(),
            Self::Selection(items) => items.is_empty(),
        }
    }

    /// Length in characters for text, in items for a selection.
    pub fn len(&self) -> usize {
        match self {
            Self::Missing => 0,
            Self::Text(text) => text.chars().count(),
            Self::Selection(items) => items.len(),
        }
    }

    /// Number of selected items. A non-empty text value counts as one.
    pub fn selected_count(&self) -> usize {
        match self {
            Self::Missing => 0,
            Self::Text(text) if text.is_empty() => 0,
            Self::Text(_) => 1,
            Self::Selection(items) => items.len(),
        }
    }

    /// The text value, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The selected items, if this is a selection.
    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            Self::Selection(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::Selection(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        Self::Selection(items.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

static MISSING: FieldValue = FieldValue::Missing;

/// Snapshot of every field value, rebuilt for each evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set the value of a field, replacing any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Value of a field. Unknown fields read as [`FieldValue::Missing`].
    pub fn get(&self, field: &str) -> &FieldValue {
        self.0.get(field).unwrap_or(&MISSING)
    }

    /// Whether the snapshot holds an entry for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterate over field values, ordered by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields in the snapshot.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the snapshot holds no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness_follows_value_kind() {
        assert!(FieldValue::Missing.is_empty());
        assert!(FieldValue::from("").is_empty());
        assert!(FieldValue::Selection(Vec::new()).is_empty());
        assert!(!FieldValue::from(" ").is_empty());
        assert!(!FieldValue::from(vec!["a"]).is_empty());
    }

    #[test]
    fn test_text_length_counts_chars() {
        assert_eq!(FieldValue::from("héllo").len(), 5);
    }

    #[test]
    fn test_unknown_field_reads_missing() {
        let values = FormValues::new().with("name", "Ada");
        assert_eq!(values.get("name"), &FieldValue::from("Ada"));
        assert_eq!(values.get("email"), &FieldValue::Missing);
    }

    #[test]
    fn test_values_deserialize_from_json() {
        let values: FormValues =
            serde_json::from_str(r#"{"name": "Ada", "tags": ["a", "b"], "terms": null}"#).unwrap();
        assert_eq!(values.get("name").as_text(), Some("Ada"));
        assert_eq!(values.get("tags").selected_count(), 2);
        assert_eq!(values.get("terms"), &FieldValue::Missing);
    }
}
