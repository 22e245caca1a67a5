//! The live binding between a form and its validation configuration.

use std::fmt;

use log::{debug, warn};
use uuid::Uuid;

use crate::adapter::FormAdapter;
use crate::engine;
use crate::error::{AdapterError, FormError, RegistryError};
use crate::field::ValidationConfig;
use crate::locale::Locale;
use crate::registry::RegistrySnapshot;
use crate::result::ValidationResult;
use crate::settings::Settings;
use crate::visibility::{FormEvent, Visibility};

/// Unique identifier for an attachment, used to correlate log lines.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct AttachmentId(Uuid);

impl AttachmentId {
    /// Create a new unique attachment ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttachmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Replacement for [`FormAdapter::on_field_error`].
pub type FieldErrorHook = Box<dyn FnMut(&str, Option<&str>)>;

/// Replacement for [`FormAdapter::on_form_error`].
pub type FormErrorHook = Box<dyn FnMut(bool)>;

/// Options for [`Attachment::attach`].
#[derive(Default)]
pub struct AttachOptions {
    /// Settings used for every evaluation.
    pub settings: Settings,
    field_error: Option<FieldErrorHook>,
    form_error: Option<FormErrorHook>,
}

impl AttachOptions {
    /// Default settings, adapter rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation settings.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Render field errors through `hook` instead of the adapter.
    pub fn on_field_error(mut self, hook: impl FnMut(&str, Option<&str>) + 'static) -> Self {
        self.field_error = Some(Box::new(hook));
        self
    }

    /// Render the form's invalid flag through `hook` instead of the adapter.
    pub fn on_form_error(mut self, hook: impl FnMut(bool) + 'static) -> Self {
        self.form_error = Some(Box::new(hook));
        self
    }
}

/// What an event led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Evaluated before any submit; nothing was rendered.
    Quiet,
    /// Evaluated and rendered.
    Rendered,
    /// Submit with a valid form: the adapter submitted natively.
    Submitted,
    /// Submit with an invalid form: submission withheld, errors rendered.
    Suppressed,
}

/// A form under validation.
///
/// Holds the adapter, the configuration built at attach time, the latest
/// result and the visibility state. All mutation happens inside
/// [`handle`](Self::handle), which runs to completion for each event.
///
/// # Example
///
/// ```ignore
/// let registry = ValidatorRegistry::new();
/// let mut form = Attachment::attach(
///     MemoryForm::new().text("email", ""),
///     &registry.snapshot(),
///     |r| {
///         Ok(ValidationConfig::new().field(
///             "email",
///             FieldSpec::new("Email").validator(r.required()?).validator(r.email()?),
///         ))
///     },
///     AttachOptions::new(),
/// )?;
///
/// assert_eq!(form.submit()?, Outcome::Suppressed);
/// ```
pub struct Attachment<A: FormAdapter> {
    id: AttachmentId,
    adapter: A,
    config: ValidationConfig,
    settings: Settings,
    visibility: Visibility,
    last_result: Option<ValidationResult>,
    field_error: Option<FieldErrorHook>,
    form_error: Option<FormErrorHook>,
}

impl<A: FormAdapter> Attachment<A> {
    /// Bind `adapter` to the configuration returned by `fields`.
    ///
    /// `fields` runs once, against `snapshot`; the resulting configuration
    /// is fixed for the lifetime of the attachment.
    pub fn attach<F>(
        adapter: A,
        snapshot: &RegistrySnapshot,
        fields: F,
        options: AttachOptions,
    ) -> Result<Self, FormError>
    where
        F: FnOnce(&RegistrySnapshot) -> Result<ValidationConfig, RegistryError>,
    {
        let config = fields(snapshot)?;
        Ok(Self::with_config(adapter, config, options))
    }

    /// Bind `adapter` to an already built configuration.
    pub fn with_config(adapter: A, config: ValidationConfig, options: AttachOptions) -> Self {
        let id = AttachmentId::new();
        debug!(
            "Attachment {} created with {} field(s): {:?}",
            id,
            config.len(),
            config.names()
        );
        Self {
            id,
            adapter,
            config,
            settings: options.settings,
            visibility: Visibility::Pristine,
            last_result: None,
            field_error: options.field_error,
            form_error: options.form_error,
        }
    }

    /// Route an adapter event into the attachment.
    ///
    /// Every event re-reads the form and re-evaluates. On `Edit` the result
    /// is rendered only once a submit has been attempted. On `Submit` the
    /// result is always rendered, and the adapter submits natively when
    /// the form is valid.
    pub fn handle(&mut self, event: FormEvent) -> Result<Outcome, FormError> {
        let next = self.visibility.next(event);
        if next != self.visibility {
            debug!(
                "Attachment {}: {:?} -> {:?}",
                self.id, self.visibility, next
            );
            self.visibility = next;
        }

        let valid = self.evaluate()?.is_valid();

        match event {
            FormEvent::Edit if !self.visibility.shows_errors() => Ok(Outcome::Quiet),
            FormEvent::Edit => {
                self.render()?;
                Ok(Outcome::Rendered)
            }
            FormEvent::Submit => {
                self.render()?;
                if valid {
                    debug!("Attachment {}: valid, submitting", self.id);
                    self.adapter.submit()?;
                    Ok(Outcome::Submitted)
                } else {
                    debug!("Attachment {}: invalid, submission suppressed", self.id);
                    Ok(Outcome::Suppressed)
                }
            }
        }
    }

    /// Shorthand for `handle(FormEvent::Edit)`.
    pub fn edit(&mut self) -> Result<Outcome, FormError> {
        self.handle(FormEvent::Edit)
    }

    /// Shorthand for `handle(FormEvent::Submit)`.
    pub fn submit(&mut self) -> Result<Outcome, FormError> {
        self.handle(FormEvent::Submit)
    }

    /// Evaluate and render now, regardless of visibility state.
    ///
    /// Does not change the visibility state and never submits.
    pub fn validate(&mut self) -> Result<ValidationResult, FormError> {
        let result = self.evaluate()?.clone();
        self.render()?;
        Ok(result)
    }

    /// Read the form and evaluate it, storing the result.
    fn evaluate(&mut self) -> Result<&ValidationResult, FormError> {
        let names = self.config.names();
        let values = self.adapter.read_values(&names)?;
        let result = engine::evaluate(&self.config, &values, &self.settings)?;
        Ok(self.last_result.insert(result))
    }

    /// Push the last result to the hooks or the adapter.
    ///
    /// A field the adapter has no target for is logged and skipped. Any
    /// other adapter error stops rendering and is returned.
    fn render(&mut self) -> Result<(), AdapterError> {
        let Some(result) = &self.last_result else {
            return Ok(());
        };

        for name in self.config.names() {
            let message = result.error(name);
            match &mut self.field_error {
                Some(hook) => hook(name, message),
                None => match self.adapter.on_field_error(name, message) {
                    Err(e) if e.is_recoverable() => {
                        warn!("Attachment {}: cannot render '{}': {}", self.id, name, e);
                    }
                    other => other?,
                },
            }
        }

        let invalid = result.is_invalid();
        match &mut self.form_error {
            Some(hook) => hook(invalid),
            None => match self.adapter.on_form_error(invalid) {
                Err(e) if e.is_recoverable() => {
                    warn!("Attachment {}: cannot render form state: {}", self.id, e);
                }
                other => other?,
            },
        }
        Ok(())
    }

    /// Get the attachment ID.
    pub fn id(&self) -> AttachmentId {
        self.id
    }

    /// Get the current visibility state.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Result of the most recent evaluation, if any event has been handled.
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }

    /// Get the configuration built at attach time.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Get the evaluation settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Change the locale used by subsequent evaluations.
    pub fn set_locale(&mut self, locale: Locale) {
        self.settings.locale = locale;
    }

    /// Get the underlying form adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Get mutable access to the form adapter.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Detach, handing the adapter back.
    pub fn into_adapter(self) -> A {
        self.adapter
    }
}

impl<A: FormAdapter + fmt::Debug> fmt::Debug for Attachment<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("id", &self.id)
            .field("adapter", &self.adapter)
            .field("config", &self.config)
            .field("visibility", &self.visibility)
            .field("last_result", &self.last_result)
            .finish_non_exhaustive()
    }
}
