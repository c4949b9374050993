use crate::error::WizardError;
use crate::model::{Assessment, EntryId, QuestionnaireRecord};
use crate::wizard::{Transition, Wizard};

/// A completed questionnaire kept in the session history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub record: QuestionnaireRecord,
}

/// Append-only list of completed questionnaires, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    fn push(&mut self, record: QuestionnaireRecord) -> EntryId {
        let id = EntryId::new(self.entries.len() as u64 + 1);
        self.entries.push(HistoryEntry { id, record });
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries in the order they were completed.
    #[must_use]
    pub fn chronological(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries most recent first, as the history page lists them.
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }
}

/// Everything one user session holds: the questionnaire in progress and the
/// questionnaires completed so far.
///
/// Owned by whoever drives the session and passed by reference; nothing here
/// is shared between sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    wizard: Wizard,
    history: History,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// # Errors
    ///
    /// See [`Wizard::submit_identity`].
    pub fn submit_identity(
        &mut self,
        given_name: &str,
        family_name: &str,
    ) -> Result<Transition, WizardError> {
        self.wizard.submit_identity(given_name, family_name)
    }

    /// # Errors
    ///
    /// See [`Wizard::submit_answer`].
    pub fn submit_answer(&mut self, text: &str) -> Result<Transition, WizardError> {
        self.wizard.submit_answer(text)
    }

    #[must_use]
    pub fn classification_input(&self) -> Option<String> {
        self.wizard.classification_input()
    }

    /// Complete the pending questionnaire and append its snapshot to history.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NotPending` if nothing is waiting for a result;
    /// history is left untouched in that case.
    pub fn record_assessment(&mut self, assessment: Assessment) -> Result<EntryId, WizardError> {
        let snapshot = self.wizard.complete(assessment)?;
        Ok(self.history.push(snapshot))
    }

    /// Replace the in-progress questionnaire with an empty one. History is kept.
    pub fn reset(&mut self) {
        self.wizard.reset();
    }
}
