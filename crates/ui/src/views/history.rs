use dioxus::prelude::*;

use crate::context::SessionHandle;
use crate::vm::{HistoryCardVm, map_history_cards};

#[component]
pub fn HistoryView() -> Element {
    let handle = use_context::<SessionHandle>();
    let state = handle.state();
    let cards = map_history_cards(state.read().history());

    rsx! {
        div { class: "page",
            h2 { "Historique des demandes" }

            if cards.is_empty() {
                p { class: "info", "Aucune analyse enregistrée pour le moment." }
            } else {
                div { class: "history",
                    for card in cards {
                        HistoryCard { key: "{card.id.value()}", card }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryCard(card: HistoryCardVm) -> Element {
    rsx! {
        div { class: "card",
            p {
                strong { "Prénom : " }
                "{card.given_name}"
            }
            p {
                strong { "Nom : " }
                "{card.family_name}"
            }
            for answer in card.answers.iter() {
                p { key: "{answer.index}",
                    strong { "Réponse {answer.index} : " }
                    "{answer.text}"
                }
            }
            p {
                strong { "Sentiment détecté : " }
                "{card.sentiment}"
            }
            div { class: "grade-circle", style: "background-color: {card.color};", "{card.grade}" }
            p { class: "card-meta", "{card.classified_at_str} · {card.classifier_label}" }
        }
    }
}
