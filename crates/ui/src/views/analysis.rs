use dioxus::prelude::*;
use dioxus_router::Link;
use humeur_core::Transition;

use crate::context::{AppContext, SessionHandle};
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{ResultVm, WizardScreen, map_wizard_screen};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
use humeur_core::SessionState;

/// Both name fields must be filled before answers or classification go through.
fn identity_filled(given: Signal<String>, family: Signal<String>) -> bool {
    !given.peek().is_empty() && !family.peek().is_empty()
}

#[component]
pub fn AnalysisView() -> Element {
    let ctx = use_context::<AppContext>();
    let handle = use_context::<SessionHandle>();
    let session = handle.state();
    let questionnaires = ctx.questionnaires();

    let mut given = use_signal(move || {
        session
            .peek()
            .wizard()
            .identity()
            .map(|identity| identity.given_name.clone())
            .unwrap_or_default()
    });
    let mut family = use_signal(move || {
        session
            .peek()
            .wizard()
            .identity()
            .map(|identity| identity.family_name.clone())
            .unwrap_or_default()
    });
    let mut draft = use_signal(String::new);
    let busy = use_signal(|| false);
    let error = use_signal(|| None::<ViewError>);

    let apply_identity = {
        let questionnaires = questionnaires.clone();
        use_callback(move |()| {
            let mut session = session;
            let mut error = error;
            let given_value = given.peek().clone();
            let family_value = family.peek().clone();
            let result =
                questionnaires.submit_identity(&mut session.write(), &given_value, &family_value);
            if result.is_err() {
                error.set(Some(ViewError::Unknown));
            }
        })
    };

    // The classifier runs on a copy of the session; the signal is only
    // replaced once the result has been recorded.
    let run_classification = {
        let questionnaires = questionnaires.clone();
        use_callback(move |()| {
            let mut busy = busy;
            let mut error = error;
            let mut session = session;
            if *busy.peek() || !identity_filled(given, family) {
                return;
            }
            busy.set(true);
            error.set(None);

            let questionnaires = questionnaires.clone();
            spawn(async move {
                let mut working = session.peek().clone();
                let result = questionnaires.classify_pending(&mut working).await;
                busy.set(false);
                match result {
                    Ok(_) => session.set(working),
                    Err(_) => error.set(Some(ViewError::ClassificationFailed)),
                }
            });
        })
    };

    let submit_answer = {
        let questionnaires = questionnaires.clone();
        use_callback(move |()| {
            let mut session = session;
            let mut error = error;
            if *busy.peek() || !identity_filled(given, family) {
                return;
            }
            let text = draft.peek().clone();
            let result = questionnaires.submit_answer(&mut session.write(), &text);
            match result {
                Ok(Transition::Blocked | Transition::Updated) => {}
                Ok(Transition::Advanced(_)) => draft.set(String::new()),
                Ok(Transition::ReadyToClassify) => {
                    draft.set(String::new());
                    run_classification.call(());
                }
                Err(_) => error.set(Some(ViewError::Unknown)),
            }
        })
    };

    let reset = {
        let questionnaires = questionnaires.clone();
        use_callback(move |()| {
            let mut session = session;
            let mut error = error;
            questionnaires.reset(&mut session.write());
            given.set(String::new());
            family.set(String::new());
            draft.set(String::new());
            error.set(None);
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AnalysisTestHandles>() {
                handles.register(
                    AnalysisIntents {
                        apply_identity,
                        submit_answer,
                        run_classification,
                        reset,
                    },
                    AnalysisFields {
                        session,
                        given,
                        family,
                        draft,
                    },
                );
            }
        }
    }

    let screen = map_wizard_screen(session.read().wizard());
    let is_busy = busy();
    let current_error = error();
    let general_error = current_error
        .filter(|err| *err == ViewError::Unknown)
        .map(ViewError::message);
    let awaiting_identity = matches!(screen, WizardScreen::Identity);
    let identity_locked = is_busy || matches!(screen, WizardScreen::Result(_));
    let answering = matches!(
        screen,
        WizardScreen::Question { .. } | WizardScreen::Pending { .. }
    );
    let identity_missing = answering && (given().is_empty() || family().is_empty());

    rsx! {
        div { class: "page",
            h2 { class: "page-title", "Analyse de Sentiment avec Intelligence Artificielle" }
            p { class: "info", "Répondez aux questions pour analyser votre humeur générale !" }

            div { class: "identity",
                label { r#for: "given-name", "Votre prénom :" }
                input {
                    id: "given-name",
                    r#type: "text",
                    value: "{given}",
                    disabled: identity_locked,
                    oninput: move |evt: FormEvent| {
                        given.set(evt.value());
                        if !awaiting_identity {
                            apply_identity.call(());
                        }
                    },
                }
                label { r#for: "family-name", "Votre nom :" }
                input {
                    id: "family-name",
                    r#type: "text",
                    value: "{family}",
                    disabled: identity_locked,
                    oninput: move |evt: FormEvent| {
                        family.set(evt.value());
                        if !awaiting_identity {
                            apply_identity.call(());
                        }
                    },
                }
            }

            if identity_missing {
                p { class: "info identity-missing",
                    "Veuillez saisir votre prénom et votre nom pour continuer."
                }
            } else {
                match screen {
                    WizardScreen::Identity => rsx! {
                        button {
                            id: "identity-start",
                            r#type: "button",
                            onclick: move |_| apply_identity.call(()),
                            "Commencer"
                        }
                    },
                    WizardScreen::Question { number, total, text, greeting } => rsx! {
                        p { class: "greeting", "{greeting}" }
                        div { class: "question",
                            label { r#for: "answer-input", "Question {number} / {total} : {text}" }
                            input {
                                id: "answer-input",
                                r#type: "text",
                                value: "{draft}",
                                disabled: is_busy,
                                oninput: move |evt: FormEvent| draft.set(evt.value()),
                            }
                            button {
                                id: "answer-submit",
                                r#type: "button",
                                disabled: is_busy,
                                onclick: move |_| submit_answer.call(()),
                                "Valider"
                            }
                        }
                    },
                    WizardScreen::Pending { greeting } => rsx! {
                        p { class: "greeting", "{greeting}" }
                        PendingActions {
                            busy: is_busy,
                            error: current_error,
                            on_classify: run_classification,
                        }
                    },
                    WizardScreen::Result(result) => rsx! {
                        ResultPanel { result, on_reset: reset }
                    },
                }
            }

            if let Some(message) = general_error {
                p { class: "error", "{message}" }
            }
        }
    }
}

#[component]
fn PendingActions(
    busy: bool,
    #[props(!optional)] error: Option<ViewError>,
    on_classify: EventHandler<()>,
) -> Element {
    if busy {
        return rsx! {
            p { class: "status", "Analyse en cours..." }
        };
    }

    match error {
        Some(err) => rsx! {
            p { class: "error", "{err.message()}" }
            button {
                id: "classify-retry",
                r#type: "button",
                onclick: move |_| on_classify.call(()),
                "Réessayer"
            }
        },
        None => rsx! {
            button {
                id: "classify-start",
                r#type: "button",
                onclick: move |_| on_classify.call(()),
                "Lancer l'analyse"
            }
        },
    }
}

#[component]
fn ResultPanel(result: ResultVm, on_reset: EventHandler<()>) -> Element {
    rsx! {
        p { class: "greeting", "{result.greeting}" }
        div { class: "success",
            "Sentiment global détecté : "
            strong { "{result.sentiment}" }
        }
        div { class: "grade-circle", style: "background-color: {result.color};", "{result.grade}" }
        p { class: "classifier-label", "Étiquette du modèle : {result.classifier_label}" }
        div { class: "result-actions",
            button {
                id: "reset",
                r#type: "button",
                onclick: move |_| on_reset.call(()),
                "Faire un nouveau test"
            }
            Link { to: Route::History {}, "Voir l'historique" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct AnalysisIntents {
    pub apply_identity: Callback<()>,
    pub submit_answer: Callback<()>,
    pub run_classification: Callback<()>,
    pub reset: Callback<()>,
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct AnalysisFields {
    pub session: Signal<SessionState>,
    pub given: Signal<String>,
    pub family: Signal<String>,
    pub draft: Signal<String>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AnalysisTestHandles {
    intents: Rc<RefCell<Option<AnalysisIntents>>>,
    fields: Rc<RefCell<Option<AnalysisFields>>>,
}

#[cfg(test)]
impl AnalysisTestHandles {
    pub(crate) fn register(&self, intents: AnalysisIntents, fields: AnalysisFields) {
        *self.intents.borrow_mut() = Some(intents);
        *self.fields.borrow_mut() = Some(fields);
    }

    pub(crate) fn intents(&self) -> AnalysisIntents {
        (*self.intents.borrow()).expect("analysis intents registered")
    }

    pub(crate) fn fields(&self) -> AnalysisFields {
        (*self.fields.borrow()).expect("analysis fields registered")
    }
}
