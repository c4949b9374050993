use std::mem;

use crate::error::WizardError;
use crate::model::{Assessment, QUESTIONS, QuestionNumber, QuestionnaireRecord};

/// Given and family name of the person answering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub given_name: String,
    pub family_name: String,
}

impl Identity {
    /// Returns `None` unless both names are non-empty.
    #[must_use]
    pub fn new(given_name: &str, family_name: &str) -> Option<Self> {
        if given_name.is_empty() || family_name.is_empty() {
            return None;
        }
        Some(Self {
            given_name: given_name.to_owned(),
            family_name: family_name.to_owned(),
        })
    }
}

//
// ─── STATES ───────────────────────────────────────────────────────────────────
//

/// Where the questionnaire currently stands.
///
/// `AwaitingAnswer` holds fewer than three answers; the next question is
/// `answers.len() + 1`. `PendingClassification` always holds exactly three.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WizardState {
    #[default]
    AwaitingIdentity,
    AwaitingAnswer {
        identity: Identity,
        answers: Vec<String>,
    },
    PendingClassification {
        identity: Identity,
        answers: Vec<String>,
    },
    Classified(QuestionnaireRecord),
}

/// Effect of a single input on the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Input was empty; nothing changed.
    Blocked,
    /// Names were edited in place; the current step is unchanged.
    Updated,
    /// Moved on to the given question.
    Advanced(QuestionNumber),
    /// All answers collected; the classifier can run.
    ReadyToClassify,
}

//
// ─── WIZARD ───────────────────────────────────────────────────────────────────
//

/// Linear one-question-at-a-time controller for a single questionnaire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wizard {
    state: WizardState,
}

impl Wizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Submit or edit the identity fields.
    ///
    /// Names stay editable until the questionnaire is classified.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::AlreadyClassified` once a result is shown.
    pub fn submit_identity(
        &mut self,
        given_name: &str,
        family_name: &str,
    ) -> Result<Transition, WizardError> {
        let Some(submitted) = Identity::new(given_name, family_name) else {
            return match self.state {
                WizardState::Classified(_) => Err(WizardError::AlreadyClassified),
                _ => Ok(Transition::Blocked),
            };
        };

        match &mut self.state {
            WizardState::AwaitingIdentity => {
                self.state = WizardState::AwaitingAnswer {
                    identity: submitted,
                    answers: Vec::with_capacity(QUESTIONS.len()),
                };
                Ok(Transition::Advanced(QuestionNumber::FIRST))
            }
            WizardState::AwaitingAnswer { identity, .. }
            | WizardState::PendingClassification { identity, .. } => {
                *identity = submitted;
                Ok(Transition::Updated)
            }
            WizardState::Classified(_) => Err(WizardError::AlreadyClassified),
        }
    }

    /// Append an answer to the current question.
    ///
    /// The text is stored verbatim; only the empty string is refused.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NotAwaitingAnswer` outside `AwaitingAnswer`.
    pub fn submit_answer(&mut self, text: &str) -> Result<Transition, WizardError> {
        let WizardState::AwaitingAnswer { identity, answers } = &mut self.state else {
            return Err(WizardError::NotAwaitingAnswer);
        };
        if text.is_empty() {
            return Ok(Transition::Blocked);
        }

        answers.push(text.to_owned());
        if let Some(next) = QuestionNumber::after_answers(answers.len()) {
            return Ok(Transition::Advanced(next));
        }

        let identity = mem::take(identity);
        let answers = mem::take(answers);
        self.state = WizardState::PendingClassification { identity, answers };
        Ok(Transition::ReadyToClassify)
    }

    /// Text to send to the classifier: the answers joined by single spaces.
    ///
    /// `None` unless the wizard is pending classification.
    #[must_use]
    pub fn classification_input(&self) -> Option<String> {
        match &self.state {
            WizardState::PendingClassification { answers, .. } => Some(answers.join(" ")),
            _ => None,
        }
    }

    /// Attach the classifier result and return a snapshot of the completed record.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NotPending` unless the wizard is pending
    /// classification, so a record is never classified twice.
    pub fn complete(&mut self, assessment: Assessment) -> Result<QuestionnaireRecord, WizardError> {
        let WizardState::PendingClassification { identity, answers } = &mut self.state else {
            return Err(WizardError::NotPending);
        };

        let identity = mem::take(identity);
        let record = QuestionnaireRecord {
            given_name: identity.given_name,
            family_name: identity.family_name,
            answers: mem::take(answers),
            assessment: Some(assessment),
        };
        self.state = WizardState::Classified(record.clone());
        Ok(record)
    }

    /// Start over with an all-empty questionnaire.
    pub fn reset(&mut self) {
        self.state = WizardState::AwaitingIdentity;
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            WizardState::AwaitingIdentity | WizardState::Classified(_) => None,
            WizardState::AwaitingAnswer { identity, .. }
            | WizardState::PendingClassification { identity, .. } => Some(identity),
        }
    }

    /// The question waiting for an answer, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<QuestionNumber> {
        match &self.state {
            WizardState::AwaitingAnswer { answers, .. } => {
                QuestionNumber::after_answers(answers.len())
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, WizardState::PendingClassification { .. })
    }

    /// Flat projection of the in-progress questionnaire.
    #[must_use]
    pub fn current_record(&self) -> QuestionnaireRecord {
        match &self.state {
            WizardState::AwaitingIdentity => QuestionnaireRecord::empty(),
            WizardState::AwaitingAnswer { identity, answers }
            | WizardState::PendingClassification { identity, answers } => QuestionnaireRecord {
                given_name: identity.given_name.clone(),
                family_name: identity.family_name.clone(),
                answers: answers.clone(),
                assessment: None,
            },
            WizardState::Classified(record) => record.clone(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
