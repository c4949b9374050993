use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AboutView, AnalysisView, HistoryView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", AnalysisView)] Analysis {},
        #[route("/historique", HistoryView)] History {},
        #[route("/a-propos", AboutView)] About {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
                Footer {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Navigation" }
            ul {
                li { Link { to: Route::Analysis {}, "Analyse de sentiment" } }
                li { Link { to: Route::History {}, "Historique" } }
                li { Link { to: Route::About {}, "À propos" } }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            hr {}
            p { "Créé dans le cadre du projet " strong { "YNOV Campus" } }
            p { "Merci pour votre visite" }
        }
    }
}
