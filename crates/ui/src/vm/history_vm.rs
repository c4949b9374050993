use humeur_core::History;
use humeur_core::model::EntryId;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerLineVm {
    /// 1-based.
    pub index: usize,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryCardVm {
    pub id: EntryId,
    pub given_name: String,
    pub family_name: String,
    pub answers: Vec<AnswerLineVm>,
    pub sentiment: &'static str,
    pub grade: &'static str,
    pub color: &'static str,
    pub classifier_label: String,
    pub classified_at_str: String,
}

/// History cards, most recent first.
#[must_use]
pub fn map_history_cards(history: &History) -> Vec<HistoryCardVm> {
    history
        .newest_first()
        .map(|entry| {
            let record = &entry.record;
            let answers = record
                .answers
                .iter()
                .enumerate()
                .map(|(idx, text)| AnswerLineVm {
                    index: idx + 1,
                    text: text.clone(),
                })
                .collect();
            let (classifier_label, classified_at_str) = record
                .assessment
                .as_ref()
                .map(|a| (a.classifier_label.clone(), format_datetime(a.classified_at)))
                .unwrap_or_default();

            HistoryCardVm {
                id: entry.id,
                given_name: record.given_name.clone(),
                family_name: record.family_name.clone(),
                answers,
                sentiment: record.sentiment_label(),
                grade: record.grade(),
                color: record.color(),
                classifier_label,
                classified_at_str,
            }
        })
        .collect()
}
