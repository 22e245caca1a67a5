//! Message templates and substitution.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Key/value pairs substituted into a message template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageData(BTreeMap<String, String>);

impl MessageData {
    /// Create an empty substitution map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to the display form of `value`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Get the value substituted for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate over keys and values, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Render `template` against `data`.
///
/// For each key, only the first `{key}` in the template is replaced.
/// Placeholders with no matching key are left as they are. Substituted
/// values are copied verbatim and never scanned for placeholders.
pub fn render(template: &str, data: &MessageData) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut used = BTreeSet::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let found = after.find('}').and_then(|close| {
            let key = &after[..close];
            if used.contains(key) {
                return None;
            }
            data.get(key).map(|value| (key, value, close))
        });

        match found {
            Some((key, value, close)) => {
                rendered.push_str(value);
                used.insert(key);
                rest = &after[close + 1..];
            }
            None => {
                rendered.push('{');
                rest = after;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

/// Template overrides keyed by validator name and locale.
///
/// Consulted before a validator's own templates, so an application can
/// reword or translate built-in messages without re-registering them.
///
/// ```ignore
/// let catalog = MessageCatalog::from_json(r#"{
///     "required": { "nl": "{label} is verplicht" }
/// }"#)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog(BTreeMap<String, BTreeMap<Locale, String>>);

impl MessageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builder-style insert.
    pub fn with(
        mut self,
        validator: impl Into<String>,
        locale: Locale,
        template: impl Into<String>,
    ) -> Self {
        self.insert(validator, locale, template);
        self
    }

    /// Set the template for `validator` in `locale`.
    pub fn insert(
        &mut self,
        validator: impl Into<String>,
        locale: Locale,
        template: impl Into<String>,
    ) {
        self.0
            .entry(validator.into())
            .or_default()
            .insert(locale, template.into());
    }

    /// Look up the override for `validator` in `locale`.
    pub fn get(&self, validator: &str, locale: Locale) -> Option<&str> {
        self.0
            .get(validator)
            .and_then(|templates| templates.get(&locale))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let data = MessageData::new().with("label", "Name");
        assert_eq!(render("{label} needs {min}", &data), "Name needs {min}");
    }

    #[test]
    fn test_render_handles_stray_braces() {
        let data = MessageData::new().with("min", 2);
        assert_eq!(render("{{min}} and {", &data), "{2} and {");
        assert_eq!(render("{unclosed {min}", &data), "{unclosed 2");
    }

    #[test]
    fn test_render_without_data_is_identity() {
        assert_eq!(render("plain {text}", &MessageData::new()), "plain {text}");
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog =
            MessageCatalog::from_json(r#"{"required": {"nl": "{label} is verplicht"}}"#).unwrap();
        assert_eq!(
            catalog.get("required", Locale::Nl),
            Some("{label} is verplicht")
        );
        assert_eq!(catalog.get("required", Locale::En), None);
        assert_eq!(catalog.get("email", Locale::Nl), None);
    }
}
