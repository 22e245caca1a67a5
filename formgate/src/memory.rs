//! An in-memory form.
//!
//! `MemoryForm` holds typed controls and records what the engine renders
//! into it. Useful for headless hosts and for tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::adapter::FormAdapter;
use crate::error::AdapterError;
use crate::value::{FieldValue, FormValues};

/// One option of a checkbox group or radio group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub checked: bool,
}

impl Choice {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            checked: false,
        }
    }
}

/// A control backing a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Text-like input. Reads as text.
    Text(String),
    /// A single checkbox. Reads as its value when checked, missing otherwise.
    Checkbox { value: String, checked: bool },
    /// Several checkboxes sharing a name. Reads as the checked values.
    CheckboxGroup(Vec<Choice>),
    /// Radio buttons sharing a name. Reads as the checked value, if any.
    Radio(Vec<Choice>),
    /// A control kind the form cannot read.
    Other(String),
}

impl Control {
    fn read(&self, field: &str) -> Result<FieldValue, AdapterError> {
        match self {
            Self::Text(text) => Ok(FieldValue::Text(text.clone())),
            Self::Checkbox { value, checked } => {
                Ok(checked.then(|| value.clone()).into())
            }
            Self::CheckboxGroup(choices) => Ok(FieldValue::Selection(
                choices
                    .iter()
                    .filter(|c| c.checked)
                    .map(|c| c.value.clone())
                    .collect(),
            )),
            Self::Radio(choices) => Ok(choices
                .iter()
                .find(|c| c.checked)
                .map(|c| c.value.clone())
                .into()),
            Self::Other(kind) => Err(AdapterError::UnsupportedInputKind {
                field: field.to_string(),
                kind: kind.clone(),
            }),
        }
    }
}

/// A headless [`FormAdapter`].
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    controls: BTreeMap<String, Control>,
    errors: BTreeMap<String, String>,
    no_target: BTreeSet<String>,
    invalid: bool,
    submissions: usize,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the control backing `field`.
    pub fn control(mut self, field: impl Into<String>, control: Control) -> Self {
        self.controls.insert(field.into(), control);
        self
    }

    pub fn text(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.control(field, Control::Text(value.into()))
    }

    pub fn checkbox(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.control(
            field,
            Control::Checkbox {
                value: value.into(),
                checked: false,
            },
        )
    }

    pub fn checkbox_group<S: Into<String>>(
        self,
        field: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        let choices = options.into_iter().map(Choice::new).collect();
        self.control(field, Control::CheckboxGroup(choices))
    }

    pub fn radio<S: Into<String>>(
        self,
        field: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        let choices = options.into_iter().map(Choice::new).collect();
        self.control(field, Control::Radio(choices))
    }

    /// Render calls for `field` fail with [`AdapterError::MissingTarget`].
    pub fn without_error_target(mut self, field: impl Into<String>) -> Self {
        self.no_target.insert(field.into());
        self
    }

    /// Replace the text of a text control.
    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        if let Some(Control::Text(text)) = self.controls.get_mut(field) {
            *text = value.into();
        }
    }

    /// Check or uncheck `value` in a checkbox, checkbox group or radio group.
    ///
    /// Checking a radio option unchecks the others.
    pub fn set_checked(&mut self, field: &str, value: &str, checked: bool) {
        match self.controls.get_mut(field) {
            Some(Control::Checkbox {
                value: own,
                checked: state,
            }) if own == value => *state = checked,
            Some(Control::CheckboxGroup(choices)) => {
                for choice in choices.iter_mut().filter(|c| c.value == value) {
                    choice.checked = checked;
                }
            }
            Some(Control::Radio(choices)) => {
                for choice in choices.iter_mut() {
                    if choice.value == value {
                        choice.checked = checked;
                    } else if checked {
                        choice.checked = false;
                    }
                }
            }
            _ => {}
        }
    }

    /// Error currently shown on `field`.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Every error currently shown, by field.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Whether the form is currently marked invalid.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// How many times the form was natively submitted.
    pub fn submissions(&self) -> usize {
        self.submissions
    }
}

impl FormAdapter for MemoryForm {
    fn read_values(&self, fields: &[&str]) -> Result<FormValues, AdapterError> {
        let mut values = FormValues::new();
        for &field in fields {
            let value = match self.controls.get(field) {
                Some(control) => control.read(field)?,
                None => FieldValue::Missing,
            };
            values.insert(field, value);
        }
        Ok(values)
    }

    fn on_field_error(&mut self, field: &str, message: Option<&str>) -> Result<(), AdapterError> {
        if self.no_target.contains(field) {
            return Err(AdapterError::MissingTarget {
                field: field.to_string(),
            });
        }
        match message {
            Some(message) => {
                self.errors.insert(field.to_string(), message.to_string());
            }
            None => {
                self.errors.remove(field);
            }
        }
        Ok(())
    }

    fn on_form_error(&mut self, invalid: bool) -> Result<(), AdapterError> {
        self.invalid = invalid;
        Ok(())
    }

    fn submit(&mut self) -> Result<(), AdapterError> {
        self.submissions += 1;
        Ok(())
    }
}
