use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn WelcomeView() -> Element {
    rsx! {
        section { class: "screen welcome",
            h2 { "Turn your notes into a quiz" }
            p {
                "Pick a PDF or text document. Key sentences become flashcards you can "
                "flip, grade yourself on and review with timing statistics."
            }
            ul { class: "features",
                li { "Automatic question generation" }
                li { "Per-card timing and accuracy" }
                li { "Progress charts at the end of every session" }
            }
            Link { class: "btn primary", to: Route::Upload {}, "Get Started" }
        }
    }
}
