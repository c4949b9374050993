use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use services::{ClassifierError, Prediction, SentimentClassifier};

use super::test_harness::{ViewHarness, drive_dom, setup_analysis_harness};

/// Plays back one outcome per call; `None` is a failed call.
struct ScriptedClassifier {
    outcomes: Mutex<VecDeque<Option<&'static str>>>,
    inputs: Mutex<Vec<String>>,
}

impl ScriptedClassifier {
    fn new(outcomes: &[Option<&'static str>]) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.iter().copied().collect()),
            inputs: Mutex::new(Vec::new()),
        })
    }

    fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentClassifier for ScriptedClassifier {
    async fn classify(&self, text: &str) -> Result<Prediction, ClassifierError> {
        self.inputs.lock().unwrap().push(text.to_string());
        match self.outcomes.lock().unwrap().pop_front().flatten() {
            Some(label) => Ok(Prediction {
                label: label.to_string(),
                score: 0.71,
            }),
            None => Err(ClassifierError::EmptyResponse),
        }
    }
}

fn start(classifier: &Arc<ScriptedClassifier>) -> ViewHarness {
    let mut harness = setup_analysis_harness(classifier.clone());
    harness.rebuild();
    harness
}

fn enter_identity(harness: &mut ViewHarness, given: &str, family: &str) {
    let handles = harness.analysis_handles.clone().expect("analysis handles");
    let fields = handles.fields();
    let (mut given_field, mut family_field) = (fields.given, fields.family);
    given_field.set(given.to_string());
    family_field.set(family.to_string());
    handles.intents().apply_identity.call(());
    drive_dom(&mut harness.dom);
}

fn answer(harness: &mut ViewHarness, text: &str) {
    let handles = harness.analysis_handles.clone().expect("analysis handles");
    let mut draft = handles.fields().draft;
    draft.set(text.to_string());
    handles.intents().submit_answer.call(());
    drive_dom(&mut harness.dom);
}

fn history_len(harness: &ViewHarness) -> usize {
    let handles = harness.analysis_handles.clone().expect("analysis handles");
    handles.fields().session.peek().history().len()
}

fn is_pending(harness: &ViewHarness) -> bool {
    let handles = harness.analysis_handles.clone().expect("analysis handles");
    handles.fields().session.peek().wizard().is_pending()
}

#[tokio::test(flavor = "current_thread")]
async fn third_answer_classifies_once_and_records_history() {
    let classifier = ScriptedClassifier::new(&[Some("2 stars")]);
    let mut harness = start(&classifier);

    enter_identity(&mut harness, "Ana", "Dupont");
    answer(&mut harness, "fatiguée");
    answer(&mut harness, "un examen");
    assert!(classifier.inputs().is_empty());

    answer(&mut harness, "mes amis");
    harness.drive_async().await;

    assert_eq!(classifier.inputs(), vec!["fatiguée un examen mes amis".to_string()]);
    assert_eq!(history_len(&harness), 1);
    let html = harness.render();
    assert!(html.contains("Mauvais"), "missing sentiment in {html}");
    assert!(html.contains("#FF0000"), "missing badge color in {html}");
    assert!(html.contains("Faire un nouveau test"), "missing reset button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn running_classification_refuses_further_input() {
    let classifier = ScriptedClassifier::new(&[Some("5 stars"), Some("1 star")]);
    let mut harness = start(&classifier);

    enter_identity(&mut harness, "Ana", "Dupont");
    answer(&mut harness, "reposée");
    answer(&mut harness, "un voyage");

    let handles = harness.analysis_handles.clone().unwrap();
    let intents = handles.intents();
    let mut draft = handles.fields().draft;
    draft.set("ma famille".to_string());
    intents.submit_answer.call(());
    intents.run_classification.call(());
    draft.set("encore".to_string());
    intents.submit_answer.call(());
    drive_dom(&mut harness.dom);
    harness.drive_async().await;

    assert_eq!(classifier.inputs().len(), 1);
    assert_eq!(history_len(&harness), 1);
    assert!(!is_pending(&harness));
}

#[tokio::test(flavor = "current_thread")]
async fn failed_classification_keeps_answers_and_retry_records_once() {
    let classifier = ScriptedClassifier::new(&[None, Some("4 stars")]);
    let mut harness = start(&classifier);

    enter_identity(&mut harness, "Ana", "Dupont");
    for text in ["fatiguée", "un examen", "mes amis"] {
        answer(&mut harness, text);
    }
    harness.drive_async().await;

    assert_eq!(classifier.inputs().len(), 1);
    assert_eq!(history_len(&harness), 0);
    assert!(is_pending(&harness));
    let html = harness.render();
    assert!(html.contains("classify-retry"), "missing retry button in {html}");
    assert!(html.contains("Réessayer"), "missing retry label in {html}");

    let intents = harness.analysis_handles.clone().unwrap().intents();
    intents.run_classification.call(());
    harness.drive_async().await;

    assert_eq!(classifier.inputs().len(), 2);
    assert_eq!(classifier.inputs()[1], "fatiguée un examen mes amis");
    assert_eq!(history_len(&harness), 1);
    let html = harness.render();
    assert!(html.contains("#00FF00"), "missing green badge in {html}");
    assert!(!html.contains("classify-retry"), "retry still offered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_clears_form_and_keeps_history() {
    let classifier = ScriptedClassifier::new(&[Some("3 stars")]);
    let mut harness = start(&classifier);

    enter_identity(&mut harness, "Ana", "Dupont");
    for text in ["bien", "un concert", "le sport"] {
        answer(&mut harness, text);
    }
    harness.drive_async().await;
    assert_eq!(history_len(&harness), 1);

    let handles = harness.analysis_handles.clone().unwrap();
    let fields = handles.fields();
    let mut draft = fields.draft;
    draft.set("brouillon".to_string());
    handles.intents().reset.call(());
    drive_dom(&mut harness.dom);

    assert!(fields.given.peek().is_empty());
    assert!(fields.family.peek().is_empty());
    assert!(fields.draft.peek().is_empty());
    assert_eq!(history_len(&harness), 1);
    assert!(fields.session.peek().wizard().identity().is_none());
    let html = harness.render();
    assert!(html.contains("Commencer"), "identity form not restored in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn clearing_a_name_hides_the_questions_until_refilled() {
    let classifier = ScriptedClassifier::new(&[]);
    let mut harness = start(&classifier);

    enter_identity(&mut harness, "Ana", "Dupont");
    answer(&mut harness, "fatiguée");

    let handles = harness.analysis_handles.clone().unwrap();
    let mut given = handles.fields().given;
    given.set(String::new());
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(!html.contains("Question 2"), "question shown without a name in {html}");
    assert!(html.contains("Veuillez saisir"), "missing identity notice in {html}");

    answer(&mut harness, "un examen");
    let answered = handles.fields().session.peek().wizard().current_record().answers.len();
    assert_eq!(answered, 1);

    enter_identity(&mut harness, "Léa", "Dupont");
    let html = harness.render();
    assert!(html.contains("Question 2 / 3"), "question not restored in {html}");
    assert!(html.contains("Léa Dupont"), "greeting not updated in {html}");
}
