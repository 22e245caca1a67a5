//! Field specifications and form configuration.

use crate::validator::Validator;

/// One form field: its display label and validator chain.
///
/// Chain order matters: evaluation stops at the first failing validator.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    label: String,
    validators: Vec<Validator>,
}

impl FieldSpec {
    /// Create a field with `label` and an empty chain.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            validators: Vec::new(),
        }
    }

    /// Append a validator to the chain.
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Append several validators to the chain.
    pub fn validators(mut self, validators: impl IntoIterator<Item = Validator>) -> Self {
        self.validators.extend(validators);
        self
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the validator chain, in evaluation order.
    pub fn chain(&self) -> &[Validator] {
        &self.validators
    }
}

/// Every validated field of a form, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    fields: Vec<(String, FieldSpec)>,
}

impl ValidationConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Declaring a name twice replaces the earlier spec in place.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = spec,
            None => self.fields.push((name, spec)),
        }
        self
    }

    /// Get the spec for field `name`.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, spec)| spec)
    }

    /// Iterate over fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Field names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
