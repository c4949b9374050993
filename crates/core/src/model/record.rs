use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Grade;

/// Outcome of one classifier call on a completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub grade: Grade,
    /// Top label as returned by the classifier, e.g. `"2 stars"`.
    pub classifier_label: String,
    /// Confidence of the top label. Informational only.
    pub score: f32,
    pub classified_at: DateTime<Utc>,
}

impl Assessment {
    #[must_use]
    pub fn from_label(label: impl Into<String>, score: f32, classified_at: DateTime<Utc>) -> Self {
        let classifier_label = label.into();
        Self {
            grade: Grade::from_star_label(&classifier_label),
            classifier_label,
            score,
            classified_at,
        }
    }
}

/// Flat view of a questionnaire: who answered, what they said, and the
/// computed result once classified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireRecord {
    pub given_name: String,
    pub family_name: String,
    pub answers: Vec<String>,
    pub assessment: Option<Assessment>,
}

impl QuestionnaireRecord {
    /// An all-empty record, as shown before any identity is submitted.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.given_name.is_empty()
            && self.family_name.is_empty()
            && self.answers.is_empty()
            && self.assessment.is_none()
    }

    /// Sentiment label, or `""` until classified.
    #[must_use]
    pub fn sentiment_label(&self) -> &'static str {
        self.assessment
            .as_ref()
            .map_or("", |a| a.grade.sentiment_label())
    }

    /// `"A"`, `"B"`, `"C"`, `"?"`, or `""` until classified.
    #[must_use]
    pub fn grade(&self) -> &'static str {
        self.assessment.as_ref().map_or("", |a| a.grade.letter())
    }

    /// Badge color, or `""` until classified.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.assessment.as_ref().map_or("", |a| a.grade.color())
    }
}
