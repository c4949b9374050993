#![forbid(unsafe_code)]

pub mod classifier;
pub mod error;
pub mod questionnaire_service;

pub use humeur_core::Clock;

pub use classifier::{ClassifierConfig, HuggingFaceClassifier, Prediction, SentimentClassifier};
pub use error::{ClassifierError, QuestionnaireError};
pub use questionnaire_service::QuestionnaireService;
