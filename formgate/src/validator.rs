//! The validator abstraction.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::locale::Locale;
use crate::message::MessageData;
use crate::value::{FieldValue, FormValues};

/// A single validation rule.
///
/// `check` receives the value of the field being validated and the full
/// set of form values, so a rule may compare against other fields.
pub trait Rule: Send + Sync {
    /// Whether `value` passes this rule.
    fn check(&self, value: &FieldValue, values: &FormValues) -> bool;

    /// Parameters used to fill the rule's message template.
    fn message_data(&self) -> MessageData {
        MessageData::new()
    }
}

/// Adapts a closure into a [`Rule`] with no message data.
pub struct FnRule<F>(pub F);

impl<F> Rule for FnRule<F>
where
    F: Fn(&FieldValue, &FormValues) -> bool + Send + Sync,
{
    fn check(&self, value: &FieldValue, values: &FormValues) -> bool {
        (self.0)(value, values)
    }
}

/// A named rule plus its message templates.
///
/// Validators are immutable once built. Cloning shares the rule.
#[derive(Clone)]
pub struct Validator {
    name: String,
    rule: Arc<dyn Rule>,
    messages: BTreeMap<Locale, String>,
}

impl Validator {
    /// Wrap `rule` under `name`. Add templates with [`Validator::message`].
    pub fn new(name: impl Into<String>, rule: impl Rule + 'static) -> Self {
        Self {
            name: name.into(),
            rule: Arc::new(rule),
            messages: BTreeMap::new(),
        }
    }

    /// Build a validator from a predicate closure.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let matches = Validator::from_fn("matchesPassword", |value, values| {
    ///     value == values.get("password")
    /// })
    /// .message(Locale::En, "{label} does not match the password");
    /// ```
    pub fn from_fn<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&FieldValue, &FormValues) -> bool + Send + Sync + 'static,
    {
        Self::new(name, FnRule(predicate))
    }

    /// Set the template for `locale`.
    pub fn message(mut self, locale: Locale, template: impl Into<String>) -> Self {
        self.messages.insert(locale, template.into());
        self
    }

    /// Get the registered name, used for catalog lookups.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the rule.
    pub fn check(&self, value: &FieldValue, values: &FormValues) -> bool {
        self.rule.check(value, values)
    }

    /// Get the parameters for this validator's message template.
    pub fn message_data(&self) -> MessageData {
        self.rule.message_data()
    }

    /// The validator's own template for `locale`.
    pub fn template(&self, locale: Locale) -> Option<&str> {
        self.messages.get(&locale).map(String::as_str)
    }

    /// Locales this validator has templates for.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.messages.keys().copied()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name)
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}
