use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{ProgressView, QuizView, UploadView, WelcomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WelcomeView)] Welcome {},
        #[route("/upload", UploadView)] Upload {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/progress", ProgressView)] Progress {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "PDF Flashcard Quiz" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
