//! Error types.
//!
//! A failing validator is not an error: it is recorded as data in a
//! [`ValidationResult`](crate::ValidationResult). The types here cover
//! configuration defects and adapter failures.

use thiserror::Error;

use crate::locale::Locale;

/// Errors raised while building validators from the registry.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// No factory is registered under this name.
    #[error("no validator registered under '{0}'")]
    UnknownValidator(String),

    /// The factory rejected its arguments.
    #[error("invalid arguments for validator '{validator}': {reason}")]
    InvalidArguments {
        /// Registered name of the validator.
        validator: String,
        /// What was wrong with the arguments.
        reason: String,
    },

    /// A `pattern` validator was given a pattern that does not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Compiler error.
        #[source]
        source: regex::Error,
    },
}

/// Errors that abort an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    /// A validator failed but has no template for the active locale.
    #[error("validator '{validator}' on field '{field}' has no message template for locale '{locale}'")]
    MissingTemplate {
        /// Field whose chain failed.
        field: String,
        /// Name of the failing validator.
        validator: String,
        /// Locale that was requested.
        locale: Locale,
    },
}

/// Errors reported by a [`FormAdapter`](crate::FormAdapter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The adapter does not know how to read this kind of control.
    #[error("field '{field}' uses unsupported input kind '{kind}'")]
    UnsupportedInputKind {
        /// Field backed by the control.
        field: String,
        /// Control kind as the adapter names it.
        kind: String,
    },

    /// There is nowhere to render this field's error.
    #[error("no error target for field '{field}'")]
    MissingTarget {
        /// Field without a target.
        field: String,
    },

    /// Native submission failed.
    #[error("submit failed: {0}")]
    Submit(String),
}

impl AdapterError {
    /// Whether rendering can skip past this error and carry on.
    ///
    /// Any other error raised while rendering aborts the event.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingTarget { .. })
    }
}

/// Errors surfaced by an [`Attachment`](crate::Attachment).
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

/// Errors loading a declarative form definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("malformed form definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// An unrecognised locale identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale '{0}'")]
pub struct LocaleParseError(pub String);
