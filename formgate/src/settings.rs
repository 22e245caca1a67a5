//! Evaluation settings.

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, LocalePolicy};
use crate::message::MessageCatalog;

/// Locale and message lookup used when rendering errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Locale messages are rendered in.
    pub locale: Locale,

    /// What happens when a validator has no template for `locale`.
    pub policy: LocalePolicy,

    /// Template overrides, consulted before a validator's own templates.
    pub catalog: MessageCatalog,
}

impl Settings {
    /// English, strict, no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from JSON. Missing keys take their defaults.
    ///
    /// ```ignore
    /// let settings = Settings::from_json(r#"{
    ///     "locale": "nl",
    ///     "policy": { "fallback": "en" }
    /// }"#)?;
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the locale.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Fall back to `locale` when a template is missing.
    pub fn fallback(mut self, locale: Locale) -> Self {
        self.policy = LocalePolicy::Fallback(locale);
        self
    }

    /// Fail when a template is missing.
    pub fn strict(mut self) -> Self {
        self.policy = LocalePolicy::Strict;
        self
    }

    /// Set the template overrides.
    pub fn catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}
