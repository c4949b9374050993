use thiserror::Error;

/// Errors raised when an input arrives in a wizard state that cannot accept it.
///
/// Empty inputs are not errors; they leave the wizard where it is
/// (see `Transition::Blocked`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WizardError {
    #[error("questionnaire already classified; reset to start a new one")]
    AlreadyClassified,

    #[error("wizard is not waiting for an answer")]
    NotAwaitingAnswer,

    #[error("wizard has no questionnaire pending classification")]
    NotPending,
}
