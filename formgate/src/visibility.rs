//! When computed errors are shown.

/// Events routed into an attachment by the form adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormEvent {
    /// A value changed or a key was pressed.
    Edit,
    /// The user tried to submit the form.
    Submit,
}

/// Visibility state of an attachment.
///
/// Starts `Pristine`. The first submit moves it to `SubmitAttempted`,
/// where it stays for the rest of the attachment's life.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// No submit yet: errors are computed but not shown.
    #[default]
    Pristine,
    /// A submit has happened: every evaluation is shown.
    SubmitAttempted,
}

impl Visibility {
    /// State after `event`.
    pub fn next(self, event: FormEvent) -> Self {
        match (self, event) {
            (_, FormEvent::Submit) => Self::SubmitAttempted,
            (state, FormEvent::Edit) => state,
        }
    }

    /// Whether evaluation results are forwarded to the adapter.
    pub fn shows_errors(self) -> bool {
        matches!(self, Self::SubmitAttempted)
    }
}
