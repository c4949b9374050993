use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::SessionHandle;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // One questionnaire session per window.
    use_context_provider(SessionHandle::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Analyse de Sentiment" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Une erreur est survenue" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
