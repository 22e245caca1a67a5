use serde::Serialize;

/// The error recorded for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name.
    pub field: String,
    /// Rendered message.
    pub message: String,
}

/// Outcome of evaluating a form.
///
/// Fields without an entry in [`errors`](Self::errors) are valid, and the
/// form is valid exactly when there are no entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<FieldError>,
}

impl ValidationResult {
    /// A result with no errors.
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a result from the per-field errors, in field order.
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_invalid(&self) -> bool {
        !self.valid
    }

    /// All field errors, in field declaration order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The message for `field`, if it failed.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Names of the failing fields.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
