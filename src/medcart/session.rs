//! The explicit session state machine.
//!
//! Tracking the browse/cart/submit flow as independent booleans
//! (`cart_open`, `submitting`, ...) leaves illegal combinations
//! representable. Here the flow is one enum and one transition table;
//! anything outside the table is an error. The table is also the
//! single-flight guard for submissions: `Submitting` admits no second submit.

use std::time::Duration;

use crate::error::{MedcartError, Result};

/// How long a transient "added to cart" notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// How long the post-submission confirmation stays visible before the cart
/// is cleared.
pub const CONFIRMATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    ResultsShown,
    CartOpen,
    FormEditing,
    Submitting,
    Submitted,
    SubmissionFailed,
}

impl SessionState {
    /// The transition table. Self-transitions are legal where the UI can
    /// re-enter the same state (a new query while results are shown, an
    /// edited field while the form is open).
    pub fn can_advance(self, next: SessionState) -> bool {
        use SessionState::*;
        matches!(
            (self, next),
            (Idle, ResultsShown)
                | (Idle, CartOpen)
                | (ResultsShown, ResultsShown)
                | (ResultsShown, Idle)
                | (ResultsShown, CartOpen)
                | (CartOpen, FormEditing)
                | (CartOpen, ResultsShown)
                | (CartOpen, Idle)
                | (FormEditing, FormEditing)
                | (FormEditing, CartOpen)
                | (FormEditing, Submitting)
                | (Submitting, Submitted)
                | (Submitting, SubmissionFailed)
                | (Submitted, Idle)
                | (SubmissionFailed, FormEditing)
                | (SubmissionFailed, CartOpen)
        )
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::ResultsShown => "results-shown",
            SessionState::CartOpen => "cart-open",
            SessionState::FormEditing => "form-editing",
            SessionState::Submitting => "submitting",
            SessionState::Submitted => "submitted",
            SessionState::SubmissionFailed => "submission-failed",
        };
        write!(f, "{}", name)
    }
}

/// Tracks the current state and rejects transitions outside the table.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn advance(&mut self, next: SessionState) -> Result<()> {
        if !self.state.can_advance(next) {
            return Err(MedcartError::Api(format!(
                "illegal session transition: {} -> {}",
                self.state, next
            )));
        }
        self.state = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SessionState::*;
    use super::*;

    #[test]
    fn happy_path_to_submission() {
        let mut session = Session::new();
        for next in [ResultsShown, CartOpen, FormEditing, Submitting, Submitted, Idle] {
            session.advance(next).unwrap();
        }
        assert_eq!(session.state(), Idle);
    }

    #[test]
    fn only_one_submission_in_flight() {
        let mut session = Session::new();
        session.advance(CartOpen).unwrap();
        session.advance(FormEditing).unwrap();
        session.advance(Submitting).unwrap();

        // No re-submit, no editing, until the in-flight request resolves.
        assert!(session.advance(Submitting).is_err());
        assert!(session.advance(FormEditing).is_err());
    }

    #[test]
    fn failure_allows_retry() {
        let mut session = Session::new();
        session.advance(CartOpen).unwrap();
        session.advance(FormEditing).unwrap();
        session.advance(Submitting).unwrap();
        session.advance(SubmissionFailed).unwrap();

        session.advance(FormEditing).unwrap();
        session.advance(Submitting).unwrap();
    }

    #[test]
    fn submitted_only_returns_to_idle() {
        assert!(Submitted.can_advance(Idle));
        assert!(!Submitted.can_advance(FormEditing));
        assert!(!Submitted.can_advance(Submitting));
    }

    #[test]
    fn searching_toggles_idle_and_results() {
        let mut session = Session::new();
        session.advance(ResultsShown).unwrap();
        session.advance(ResultsShown).unwrap(); // refine the query
        session.advance(Idle).unwrap(); // query shortened below the minimum
    }
}
