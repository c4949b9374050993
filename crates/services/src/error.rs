//! Shared error types for the services crate.

use thiserror::Error;

use humeur_core::WizardError;

/// Errors emitted by a `SentimentClassifier`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassifierError {
    #[error("classifier returned no labels")]
    EmptyResponse,
    #[error("classifier request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("classifier response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `QuestionnaireService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionnaireError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
