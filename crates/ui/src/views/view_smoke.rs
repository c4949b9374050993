use humeur_core::SessionState;
use humeur_core::model::Assessment;
use humeur_core::time::fixed_now;

use super::test_harness::{TEST_MODEL, ViewKind, setup_view_harness};

fn answered(given: &str, answers: &[&str]) -> SessionState {
    let mut session = SessionState::new();
    session.submit_identity(given, "Dupont").unwrap();
    for answer in answers {
        session.submit_answer(answer).unwrap();
    }
    session
}

fn classified(session: &mut SessionState, label: &str) {
    session
        .record_assessment(Assessment::from_label(label, 0.5, fixed_now()))
        .unwrap();
}

fn render(view: ViewKind, session: SessionState) -> String {
    let mut harness = setup_view_harness(view, session);
    harness.rebuild();
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn analysis_view_smoke_starts_with_identity_form() {
    let html = render(ViewKind::Analysis, SessionState::new());
    assert!(html.contains("Votre prénom"), "missing given name field in {html}");
    assert!(html.contains("Votre nom"), "missing family name field in {html}");
    assert!(html.contains("Commencer"), "missing start button in {html}");
    assert!(!html.contains("Question 1"), "question shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn analysis_view_smoke_renders_current_question() {
    let html = render(ViewKind::Analysis, answered("Ana", &["fatiguée"]));
    assert!(html.contains("Bonjour Ana Dupont"), "missing greeting in {html}");
    assert!(html.contains("Question 2 / 3"), "missing question number in {html}");
    assert!(
        html.contains("Quel événement vous a marqué récemment"),
        "missing question text in {html}"
    );
    assert!(html.contains("Valider"), "missing submit button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn analysis_view_smoke_offers_classification_when_pending() {
    let html = render(ViewKind::Analysis, answered("Ana", &["a", "b", "c"]));
    assert!(html.contains("classify-start"), "missing classify button in {html}");
    assert!(!html.contains("Question"), "question still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn analysis_view_smoke_renders_grade_badge() {
    let mut session = answered("Ana", &["fatiguée", "un examen", "mes amis"]);
    classified(&mut session, "2 stars");

    let html = render(ViewKind::Analysis, session);
    assert!(html.contains("Mauvais"), "missing sentiment in {html}");
    assert!(html.contains("#FF0000"), "missing badge color in {html}");
    assert!(html.contains("grade-circle"), "missing badge in {html}");
    assert!(html.contains("Faire un nouveau test"), "missing reset button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_empty_state() {
    let html = render(ViewKind::History, SessionState::new());
    assert!(
        html.contains("Aucune analyse enregistrée pour le moment."),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_lists_newest_first() {
    let mut session = answered("Ana", &["fatiguée", "un examen", "mes amis"]);
    classified(&mut session, "1 star");
    session.reset();
    session.submit_identity("Léo", "Martin").unwrap();
    for answer in ["reposé", "un voyage", "ma famille"] {
        session.submit_answer(answer).unwrap();
    }
    classified(&mut session, "5 stars");

    let html = render(ViewKind::History, session);
    let newest = html.find("Léo").expect("newest card rendered");
    let oldest = html.find("Ana").expect("oldest card rendered");
    assert!(newest < oldest, "history not newest-first: {html}");
    assert!(html.contains("Réponse 3"), "missing indexed answer in {html}");
    assert!(html.contains("un examen"), "missing answer text in {html}");
    assert!(html.contains("#00FF00"), "missing green badge in {html}");
    assert!(html.contains("#FF0000"), "missing red badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn about_view_smoke_mentions_model() {
    let html = render(ViewKind::About, SessionState::new());
    assert!(html.contains("À propos"), "missing title in {html}");
    assert!(html.contains(TEST_MODEL), "missing model name in {html}");
}
