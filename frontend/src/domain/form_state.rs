//! Submission lifecycle shared by every form.
//!
//! `Editing → Validating → Submitting → Editing`. A rejected validation also
//! returns to `Editing`. Success leaves the form pristine again; failure
//! keeps the user's edits.

use std::fmt;

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input.
    Editing,
    /// Running field validators, including backend lookups.
    Validating,
    /// Mutation calls are in flight.
    Submitting,
}

/// Events that move a form between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The user changed a field.
    Edit,
    /// Submit was pressed.
    Validate,
    /// Validation reported field errors.
    Reject,
    /// Validation passed; mutations start.
    Submit,
    /// Every mutation completed.
    Succeed,
    /// A mutation failed.
    Fail,
}

impl fmt::Display for FormPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Raised when an event is not valid in the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("form cannot handle {event} while {phase}")]
pub struct FormTransitionError {
    /// Phase at the time of the event.
    pub phase: FormPhase,
    /// Rejected event.
    pub event: FormEvent,
}

/// Phase plus the pristine and submit-succeeded flags a view binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormStatus {
    phase: FormPhase,
    pristine: bool,
    submit_succeeded: bool,
}

impl Default for FormStatus {
    fn default() -> Self {
        Self {
            phase: FormPhase::Editing,
            pristine: true,
            submit_succeeded: false,
        }
    }
}

impl FormStatus {
    /// Fresh, pristine form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// No edits since creation or the last successful submit.
    pub fn is_pristine(&self) -> bool {
        self.pristine
    }

    /// The most recent submit completed every step.
    pub fn submit_succeeded(&self) -> bool {
        self.submit_succeeded
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing && !self.pristine
    }

    /// Apply an event.
    ///
    /// # Errors
    ///
    /// Returns [`FormTransitionError`] when `event` is not accepted in the
    /// current phase; the status is left unchanged.
    pub fn apply(&mut self, event: FormEvent) -> Result<FormPhase, FormTransitionError> {
        let next = match (self.phase, event) {
            (FormPhase::Editing, FormEvent::Edit) => {
                self.pristine = false;
                self.submit_succeeded = false;
                FormPhase::Editing
            }
            (FormPhase::Editing, FormEvent::Validate) => FormPhase::Validating,
            (FormPhase::Validating, FormEvent::Reject) => FormPhase::Editing,
            (FormPhase::Validating, FormEvent::Submit) => FormPhase::Submitting,
            (FormPhase::Submitting, FormEvent::Succeed) => {
                self.pristine = true;
                self.submit_succeeded = true;
                FormPhase::Editing
            }
            (FormPhase::Submitting, FormEvent::Fail) => FormPhase::Editing,
            (phase, event) => return Err(FormTransitionError { phase, event }),
        };
        self.phase = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dirty() -> FormStatus {
        let mut status = FormStatus::new();
        status.apply(FormEvent::Edit).expect("edit accepted");
        status
    }

    #[test]
    fn pristine_form_cannot_submit() {
        assert!(!FormStatus::new().can_submit());
        assert!(dirty().can_submit());
    }

    #[test]
    fn success_returns_to_pristine_editing() {
        let mut status = dirty();
        for event in [FormEvent::Validate, FormEvent::Submit, FormEvent::Succeed] {
            status.apply(event).expect("valid transition");
        }
        assert_eq!(status.phase(), FormPhase::Editing);
        assert!(status.is_pristine());
        assert!(status.submit_succeeded());
    }

    #[test]
    fn failure_keeps_edits() {
        let mut status = dirty();
        for event in [FormEvent::Validate, FormEvent::Submit, FormEvent::Fail] {
            status.apply(event).expect("valid transition");
        }
        assert!(status.can_submit());
        assert!(!status.submit_succeeded());
    }

    #[rstest]
    #[case(FormPhase::Validating, FormEvent::Edit)]
    #[case(FormPhase::Submitting, FormEvent::Validate)]
    #[case(FormPhase::Editing, FormEvent::Succeed)]
    fn rejects_out_of_order_events(#[case] phase: FormPhase, #[case] event: FormEvent) {
        let mut status = dirty();
        status.phase = phase;
        let err = status.apply(event).expect_err("transition rejected");
        assert_eq!(err, FormTransitionError { phase, event });
        assert_eq!(status.phase(), phase);
    }
}
