//! Contact form controller core: per-field validation and the submission flow.
//!
//! DESIGN
//! ======
//! [`ContactFormCore`] owns the form's behavior but none of its DOM. It reads
//! and writes the page through a [`FormSurface`] and delivers submissions
//! through a [`ContactTransport`], so the whole flow runs in host tests with
//! recording fakes.
//!
//! Submission phases: `Idle -> Submitting -> Idle`. While `Submitting` the
//! submit button is disabled and a second submit is rejected outright.
//!
//! TRADE-OFFS
//! ==========
//! Blur always validates; input events validate only fields already flagged
//! invalid. Errors therefore clear as soon as the user fixes them, but never
//! appear mid-draft.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::cell::Cell;

use crate::net::contact::{ContactSubmission, ContactTransport, SubmitError};
use crate::state::validation::{FieldSnapshot, ValidationError, revalidates_on_input, validate_snapshot};

pub const SENDING_LABEL: &str = "Sending...";
pub const ERROR_CLASS: &str = "error";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const ERROR_COLOR: &str = "#dc3545";
pub const BANNER_EXIT_MS: u32 = 300;

/// Slide animations referenced by [`BANNER_STYLE`] and the exit transition.
pub const BANNER_KEYFRAMES: &str = "\
@keyframes slideInRight {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}";

pub const BANNER_EXIT_ANIMATION: &str = "slideOutRight 0.3s ease";

/// Inline style for the floating banner; `background` comes from [`Banner`].
pub const BANNER_STYLE: [(&str, &str); 9] = [
    ("position", "fixed"),
    ("top", "100px"),
    ("right", "20px"),
    ("color", "white"),
    ("padding", "1.5rem 2rem"),
    ("border-radius", "8px"),
    ("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.15)"),
    ("z-index", "10000"),
    ("animation", "slideInRight 0.3s ease"),
];

/// Read/write access to the rendered form.
pub trait FormSurface {
    fn field_count(&self) -> usize;
    fn field(&self, index: usize) -> Option<FieldSnapshot>;
    /// Replace the field's error presentation with `result`.
    fn render_field(&self, index: usize, result: Result<(), ValidationError>);
    /// Current submit button label, or `None` if the form has no submit button.
    fn submit_label(&self) -> Option<String>;
    fn set_submit_state(&self, label: &str, disabled: bool);
    fn reset(&self);
    fn announce(&self, outcome: &SubmitOutcome);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(SubmitError),
}

impl SubmitOutcome {
    #[must_use]
    pub fn banner(&self) -> Banner {
        match self {
            Self::Sent => Banner {
                class_name: "success-message",
                background: "#28a745",
                html: "<strong>✓ Success!</strong><br>\
                       Your message has been sent successfully. We'll get back to you soon!",
            },
            Self::Failed(_) => Banner {
                class_name: "failure-message",
                background: ERROR_COLOR,
                html: "<strong>Message not sent.</strong><br>Please try again in a moment.",
            },
        }
    }
}

/// Transient notification content shown after a submission settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Banner {
    pub class_name: &'static str,
    pub background: &'static str,
    pub html: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{count} field(s) failed validation")]
    Invalid { count: usize },
}

pub struct ContactFormCore<S, T> {
    surface: S,
    transport: T,
    phase: Cell<SubmitPhase>,
}

impl<S: FormSurface, T: ContactTransport> ContactFormCore<S, T> {
    pub fn new(surface: S, transport: T) -> Self {
        Self { surface, transport, phase: Cell::new(SubmitPhase::Idle) }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    /// Validate and render one field.
    ///
    /// # Errors
    ///
    /// Returns the field's [`ValidationError`]. A missing index counts as valid.
    pub fn validate_field(&self, index: usize) -> Result<(), ValidationError> {
        let Some(field) = self.surface.field(index) else {
            return Ok(());
        };
        let result = validate_snapshot(&field);
        self.surface.render_field(index, result);
        result
    }

    /// Focus left the field.
    ///
    /// # Errors
    ///
    /// See [`Self::validate_field`].
    pub fn on_blur(&self, index: usize) -> Result<(), ValidationError> {
        self.validate_field(index)
    }

    /// The field's value changed. Returns `None` when no validation ran.
    pub fn on_input(&self, index: usize, marked_invalid: bool) -> Option<Result<(), ValidationError>> {
        revalidates_on_input(marked_invalid).then(|| self.validate_field(index))
    }

    /// Validate every required field, rendering each result. Returns the
    /// number of failures.
    pub fn validate_required(&self) -> usize {
        (0..self.surface.field_count())
            .filter(|&index| self.surface.field(index).is_some_and(|field| field.required))
            .filter(|&index| self.validate_field(index).is_err())
            .count()
    }

    /// Run the submit flow: validate, lock the button, deliver, announce,
    /// reset on success, and restore the button.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected`] when the flow never reached the transport.
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitRejected> {
        if self.phase.get() == SubmitPhase::Submitting {
            return Err(SubmitRejected::InFlight);
        }
        let invalid = self.validate_required();
        if invalid > 0 {
            return Err(SubmitRejected::Invalid { count: invalid });
        }

        let fields: Vec<FieldSnapshot> = (0..self.surface.field_count())
            .filter_map(|index| self.surface.field(index))
            .collect();
        let submission = ContactSubmission::from_fields(&fields);

        self.phase.set(SubmitPhase::Submitting);
        let original_label = self.surface.submit_label();
        if original_label.is_some() {
            self.surface.set_submit_state(SENDING_LABEL, true);
        }

        let outcome = match self.transport.submit(&submission).await {
            Ok(()) => SubmitOutcome::Sent,
            Err(e) => SubmitOutcome::Failed(e),
        };

        self.surface.announce(&outcome);
        if outcome == SubmitOutcome::Sent {
            self.surface.reset();
        }
        if let Some(label) = original_label {
            self.surface.set_submit_state(&label, false);
        }
        self.phase.set(SubmitPhase::Idle);
        Ok(outcome)
    }
}
