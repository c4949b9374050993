use dioxus::prelude::*;

use crate::context::AppContext;

#[component]
pub fn AboutView() -> Element {
    let ctx = use_context::<AppContext>();
    let model = ctx.model_name().to_string();

    rsx! {
        div { class: "page",
            h2 { "À propos de ce projet" }
            p {
                "Ce projet a été réalisé dans le cadre du "
                strong { "YNOV Campus" }
                "."
            }
            h3 { "Technologies utilisées" }
            ul {
                li { "Rust" }
                li { "Dioxus" }
                li { "Modèle Hugging Face : {model}" }
            }
            p { "Merci de votre visite !" }
        }
    }
}
