//! Built-in validators.
//!
//! Each rule comes with an English template. Registered names are the
//! `camelCase` constants below.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RegistryError;
use crate::locale::Locale;
use crate::message::MessageData;
use crate::registry::{Arg, ValidatorRegistry};
use crate::validator::{Rule, Validator};
use crate::value::{FieldValue, FormValues};

pub const REQUIRED: &str = "required";
pub const EMAIL: &str = "email";
pub const MIN_LENGTH: &str = "minLength";
pub const MAX_LENGTH: &str = "maxLength";
pub const MIN_SELECTIONS: &str = "minSelections";
pub const MAX_SELECTIONS: &str = "maxSelections";
pub const PATTERN: &str = "pattern";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Fails on a missing value, an empty string or an empty selection.
#[derive(Debug, Clone, Copy)]
pub struct Required;

impl Rule for Required {
    fn check(&self, value: &FieldValue, _values: &FormValues) -> bool {
        !value.is_empty()
    }
}

/// Fails unless the value is a syntactically plausible email address.
#[derive(Debug, Clone, Copy)]
pub struct Email;

impl Rule for Email {
    fn check(&self, value: &FieldValue, _values: &FormValues) -> bool {
        value.as_text().is_some_and(|text| EMAIL_RE.is_match(text))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    pub min: usize,
}

impl Rule for MinLength {
    fn check(&self, value: &FieldValue, _values: &FormValues) -> bool {
        value.len() >= self.min
    }

    fn message_data(&self) -> MessageData {
        MessageData::new().with("min", self.min)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    pub max: usize,
}

impl Rule for MaxLength {
    fn check(&self, value: &FieldValue, _values: &FormValues) -> bool {
        value.len() <= self.max
    }

    fn message_data(&self) -> MessageData {
        MessageData::new().with("max", self.max)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MinSelections {
    pub min: usize,
}

impl Rule for MinSelections {
    fn check(&self, value: &FieldValue, _values: &FormValues) -> bool {
        value.selected_count() >= self.min
    }

    fn message_data(&self) -> MessageData {
        MessageData::new().with("min", self.min)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxSelections {
    pub max: usize,
}

impl Rule for MaxSelections {
    fn check(&self, value: &FieldValue, _values: &FormValues) -> bool {
        value.selected_count() <= self.max
    }

    fn message_data(&self) -> MessageData {
        MessageData::new().with("max", self.max)
    }
}

/// Fails unless the text value matches a regular expression.
/// A missing value is matched as the empty string.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub regex: Regex,
}

impl Rule for Pattern {
    fn check(&self, value: &FieldValue, _values: &FormValues) -> bool {
        match value {
            FieldValue::Missing => self.regex.is_match(""),
            FieldValue::Text(text) => self.regex.is_match(text),
            FieldValue::Selection(items) => items.iter().all(|item| self.regex.is_match(item)),
        }
    }

    fn message_data(&self) -> MessageData {
        MessageData::new().with("pattern", self.regex.as_str())
    }
}

/// `required`: fails on empty values.
pub fn required() -> Validator {
    Validator::new(REQUIRED, Required).message(Locale::En, "{label} is required")
}

/// `email`: fails unless the value is an email address.
pub fn email() -> Validator {
    Validator::new(EMAIL, Email).message(Locale::En, "{label} must be a valid email address")
}

/// `minLength(min)`: fails on fewer than `min` characters or items.
pub fn min_length(min: usize) -> Validator {
    Validator::new(MIN_LENGTH, MinLength { min })
        .message(Locale::En, "{label} must be at least {min} characters")
}

/// `maxLength(max)`: fails on more than `max` characters or items.
pub fn max_length(max: usize) -> Validator {
    Validator::new(MAX_LENGTH, MaxLength { max })
        .message(Locale::En, "{label} must be at most {max} characters")
}

/// `minSelections(min)`: fails on fewer than `min` selected items.
pub fn min_selections(min: usize) -> Validator {
    Validator::new(MIN_SELECTIONS, MinSelections { min })
        .message(Locale::En, "You must choose at least {min} items")
}

/// `maxSelections(max)`: fails on more than `max` selected items.
pub fn max_selections(max: usize) -> Validator {
    Validator::new(MAX_SELECTIONS, MaxSelections { max })
        .message(Locale::En, "You must choose at most {max} items")
}

/// `pattern(regex)`: fails unless the value matches `regex`.
pub fn pattern(pattern: &str) -> Result<Validator, RegistryError> {
    let regex = Regex::new(pattern).map_err(|source| RegistryError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(Validator::new(PATTERN, Pattern { regex })
        .message(Locale::En, "{label} is not in the expected format"))
}

/// Install every built-in factory into `registry`.
pub(crate) fn install(registry: &mut ValidatorRegistry) {
    registry.register(REQUIRED, |args: &[Arg]| {
        expect_arity(REQUIRED, args, 0)?;
        Ok(required())
    });
    registry.register(EMAIL, |args: &[Arg]| {
        expect_arity(EMAIL, args, 0)?;
        Ok(email())
    });
    registry.register(MIN_LENGTH, |args: &[Arg]| {
        count_arg(MIN_LENGTH, args).map(min_length)
    });
    registry.register(MAX_LENGTH, |args: &[Arg]| {
        count_arg(MAX_LENGTH, args).map(max_length)
    });
    registry.register(MIN_SELECTIONS, |args: &[Arg]| {
        count_arg(MIN_SELECTIONS, args).map(min_selections)
    });
    registry.register(MAX_SELECTIONS, |args: &[Arg]| {
        count_arg(MAX_SELECTIONS, args).map(max_selections)
    });
    registry.register(PATTERN, |args: &[Arg]| {
        expect_arity(PATTERN, args, 1)?;
        let source = args[0].as_str().ok_or_else(|| RegistryError::InvalidArguments {
            validator: PATTERN.to_string(),
            reason: format!("expected a pattern string, got {}", args[0]),
        })?;
        pattern(source)
    });
}

fn expect_arity(validator: &str, args: &[Arg], arity: usize) -> Result<(), RegistryError> {
    if args.len() == arity {
        Ok(())
    } else {
        Err(RegistryError::InvalidArguments {
            validator: validator.to_string(),
            reason: format!("expected {arity} argument(s), got {}", args.len()),
        })
    }
}

fn count_arg(validator: &str, args: &[Arg]) -> Result<usize, RegistryError> {
    expect_arity(validator, args, 1)?;
    args[0]
        .as_count()
        .ok_or_else(|| RegistryError::InvalidArguments {
            validator: validator.to_string(),
            reason: format!("expected a non-negative integer, got {}", args[0]),
        })
}
