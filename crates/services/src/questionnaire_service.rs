use std::sync::Arc;

use humeur_core::model::{Assessment, EntryId};
use humeur_core::{SessionState, Transition, WizardError};
use tracing::{debug, info, warn};

use crate::Clock;
use crate::classifier::SentimentClassifier;
use crate::error::QuestionnaireError;

/// Drives a session's questionnaire and owns the single classifier call per
/// completed questionnaire.
///
/// The service holds no session data; callers pass the `SessionState` they own.
#[derive(Clone)]
pub struct QuestionnaireService {
    clock: Clock,
    classifier: Arc<dyn SentimentClassifier>,
}

impl QuestionnaireService {
    #[must_use]
    pub fn new(clock: Clock, classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self { clock, classifier }
    }

    /// # Errors
    ///
    /// Returns `QuestionnaireError::Wizard` once the questionnaire is classified.
    pub fn submit_identity(
        &self,
        session: &mut SessionState,
        given_name: &str,
        family_name: &str,
    ) -> Result<Transition, QuestionnaireError> {
        let transition = session.submit_identity(given_name, family_name)?;
        debug!(?transition, "identity submitted");
        Ok(transition)
    }

    /// # Errors
    ///
    /// Returns `QuestionnaireError::Wizard` when no question is waiting.
    pub fn submit_answer(
        &self,
        session: &mut SessionState,
        text: &str,
    ) -> Result<Transition, QuestionnaireError> {
        let transition = session.submit_answer(text)?;
        debug!(?transition, "answer submitted");
        Ok(transition)
    }

    /// Classify a piece of text and map the top label to a grade.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::Classifier` if the classifier call fails.
    pub async fn assess(&self, text: &str) -> Result<Assessment, QuestionnaireError> {
        let prediction = self.classifier.classify(text).await.map_err(|err| {
            warn!(error = %err, "sentiment classification failed");
            err
        })?;
        let assessment = Assessment::from_label(prediction.label, prediction.score, self.clock.now());
        info!(
            grade = assessment.grade.letter(),
            label = %assessment.classifier_label,
            score = assessment.score,
            "questionnaire classified"
        );
        Ok(assessment)
    }

    /// Classify the pending questionnaire and append it to the session history.
    ///
    /// On classifier failure the questionnaire stays pending with its answers,
    /// history is untouched, and the call can be repeated.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::Wizard` if nothing is pending, or
    /// `QuestionnaireError::Classifier` if the classifier call fails.
    pub async fn classify_pending(
        &self,
        session: &mut SessionState,
    ) -> Result<EntryId, QuestionnaireError> {
        let input = session
            .classification_input()
            .ok_or(WizardError::NotPending)?;
        let assessment = self.assess(&input).await?;
        let entry_id = session.record_assessment(assessment)?;
        debug!(%entry_id, history_len = session.history().len(), "history entry appended");
        Ok(entry_id)
    }

    pub fn reset(&self, session: &mut SessionState) {
        session.reset();
        debug!("questionnaire reset");
    }
}
