//! The boundary between the engine and a concrete form.

use crate::error::AdapterError;
use crate::value::FormValues;

/// A form the engine can read values from and render errors into.
///
/// The adapter owns the controls. It is also responsible for routing its
/// native change/input/submit events into
/// [`Attachment::handle`](crate::Attachment::handle).
pub trait FormAdapter {
    /// Read the current value of each named field.
    ///
    /// Returns [`AdapterError::UnsupportedInputKind`] for controls the
    /// adapter cannot read. Unreadable controls must never be reported as
    /// empty.
    fn read_values(&self, fields: &[&str]) -> Result<FormValues, AdapterError>;

    /// Show `message` on `field`, or clear its error when `None`.
    fn on_field_error(&mut self, field: &str, message: Option<&str>) -> Result<(), AdapterError>;

    /// Mark the whole form as invalid or valid.
    fn on_form_error(&mut self, invalid: bool) -> Result<(), AdapterError>;

    /// Perform the form's native submission.
    fn submit(&mut self) -> Result<(), AdapterError>;
}
