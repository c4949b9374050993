mod hugging_face;

use async_trait::async_trait;

use crate::error::ClassifierError;

pub use hugging_face::{ClassifierConfig, HuggingFaceClassifier};

/// Top-ranked label returned by a classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Star label such as `"4 stars"`.
    pub label: String,
    pub score: f32,
}

/// Capability to rate a piece of text.
///
/// Implementations are created once and shared; a call must not depend on
/// earlier calls.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify `text` and return the highest-ranked label.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError` if the model cannot be reached or answers
    /// with nothing usable.
    async fn classify(&self, text: &str) -> Result<Prediction, ClassifierError>;
}
