use humeur_core::model::{QUESTIONS, QuestionNumber};
use humeur_core::{Identity, Wizard, WizardState};

/// What the analysis page should show for the current wizard state.
#[derive(Clone, Debug, PartialEq)]
pub enum WizardScreen {
    Identity,
    Question {
        number: u8,
        total: usize,
        text: &'static str,
        greeting: String,
    },
    Pending {
        greeting: String,
    },
    Result(ResultVm),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultVm {
    pub greeting: String,
    pub sentiment: &'static str,
    pub grade: &'static str,
    pub color: &'static str,
    pub classifier_label: String,
}

fn greeting(given_name: &str, family_name: &str) -> String {
    format!("Bonjour {given_name} {family_name}")
}

fn identity_greeting(identity: &Identity) -> String {
    greeting(&identity.given_name, &identity.family_name)
}

#[must_use]
pub fn map_wizard_screen(wizard: &Wizard) -> WizardScreen {
    match wizard.state() {
        WizardState::AwaitingIdentity => WizardScreen::Identity,
        WizardState::AwaitingAnswer { identity, answers } => {
            match QuestionNumber::after_answers(answers.len()) {
                Some(number) => WizardScreen::Question {
                    number: number.value(),
                    total: QUESTIONS.len(),
                    text: number.text(),
                    greeting: identity_greeting(identity),
                },
                None => WizardScreen::Pending {
                    greeting: identity_greeting(identity),
                },
            }
        }
        WizardState::PendingClassification { identity, .. } => WizardScreen::Pending {
            greeting: identity_greeting(identity),
        },
        WizardState::Classified(record) => WizardScreen::Result(ResultVm {
            greeting: greeting(&record.given_name, &record.family_name),
            sentiment: record.sentiment_label(),
            grade: record.grade(),
            color: record.color(),
            classifier_label: record
                .assessment
                .as_ref()
                .map(|a| a.classifier_label.clone())
                .unwrap_or_default(),
        }),
    }
}
