use std::path::PathBuf;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use flashquiz_core::time::fixed_clock;
use services::{Deck, DeckService, QuizService};

use crate::context::{QuizStore, UiApp, build_app_context};
use crate::views::{ProgressView, QuizView, UploadView, WelcomeView};

pub const NOTES: &str = "Gravity is the force that pulls objects toward each other. ";

struct TestApp {
    deck_service: Arc<DeckService>,
}

impl UiApp for TestApp {
    fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }

    fn initial_file(&self) -> Option<PathBuf> {
        None
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Welcome,
    Upload,
    Quiz,
    Progress,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    view: ViewKind,
    quiz: QuizService,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        deck_service: Arc::new(DeckService::default()),
    });
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    let quiz = props.quiz.clone();
    use_context_provider(move || QuizStore {
        quiz: Signal::new(quiz),
        revealed: Signal::new(false),
    });
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Welcome => rsx! { WelcomeView {} },
        ViewKind::Upload => rsx! { UploadView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn new(view: ViewKind, quiz: QuizService) -> Self {
        let mut dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { view, quiz });
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self { dom }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_deck() -> Deck {
    DeckService::default()
        .build_from_text("notes.txt", &NOTES.repeat(9))
        .expect("sample deck")
}

pub fn started_quiz() -> QuizService {
    let mut quiz = QuizService::new(fixed_clock());
    quiz.start(&sample_deck()).expect("start quiz");
    quiz
}
