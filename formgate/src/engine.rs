//! The evaluation algorithm.
//!
//! Evaluation is a pure function of the configuration, the current values
//! and the settings. It never looks at whether a submit has happened; that
//! is the [`Visibility`](crate::Visibility) state machine's business.

use log::trace;

use crate::error::EvaluateError;
use crate::field::{FieldSpec, ValidationConfig};
use crate::message;
use crate::result::{FieldError, ValidationResult};
use crate::settings::Settings;
use crate::validator::Validator;
use crate::value::FormValues;

/// Evaluate every field of `config` against `values`.
///
/// Each field's chain runs left to right and stops at the first failure.
/// Fields are independent; the result lists failing fields in declaration
/// order.
pub fn evaluate(
    config: &ValidationConfig,
    values: &FormValues,
    settings: &Settings,
) -> Result<ValidationResult, EvaluateError> {
    let mut errors = Vec::new();
    for (name, spec) in config.iter() {
        if let Some(message) = evaluate_field(name, spec, values, settings)? {
            errors.push(FieldError {
                field: name.to_string(),
                message,
            });
        }
    }
    Ok(ValidationResult::from_errors(errors))
}

/// Evaluate a single field's chain.
///
/// Returns the rendered message of the first failing validator, or `None`
/// if every validator passes.
pub fn evaluate_field(
    name: &str,
    spec: &FieldSpec,
    values: &FormValues,
    settings: &Settings,
) -> Result<Option<String>, EvaluateError> {
    let value = values.get(name);
    for validator in spec.chain() {
        let passed = validator.check(value, values);
        trace!("{}: {} -> {}", name, validator.name(), passed);
        if passed {
            continue;
        }

        let template =
            template_for(validator, settings).ok_or_else(|| EvaluateError::MissingTemplate {
                field: name.to_string(),
                validator: validator.name().to_string(),
                locale: settings.locale,
            })?;

        let mut data = validator.message_data();
        data.insert("label", spec.label());
        return Ok(Some(message::render(template, &data)));
    }
    Ok(None)
}

/// Find the template for `validator`, trying each candidate locale in turn.
/// Catalog overrides win over the validator's own templates.
fn template_for<'a>(validator: &'a Validator, settings: &'a Settings) -> Option<&'a str> {
    settings
        .policy
        .candidates(settings.locale)
        .find_map(|locale| {
            settings
                .catalog
                .get(validator.name(), locale)
                .or_else(|| validator.template(locale))
        })
}
