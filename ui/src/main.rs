#![allow(non_snake_case)]

use dioxus::prelude::*;

mod state;
mod timers;
mod views;

use state::{Catalog, Page, CURRENT_PAGE, SESSION};
use views::chatbot::Chatbot;
use views::generator::QuizGenerator;
use views::login::LoginForm;
use views::notes_browser::NotesBrowser;
use views::quiz_browser::QuizBrowser;
use views::scanner::HandwritingScanner;
use views::search_bar::SearchBar;
use views::toast::ToastStack;
use views::upload::UploadForm;

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}

#[component]
fn App() -> Element {
    let page = *CURRENT_PAGE.read();
    let session = SESSION.read().clone();

    let nav = [
        (Page::Notes, "Notes"),
        (Page::Quizzes, "Quizzes"),
        (Page::Generator, "AI Quiz Generator"),
        (Page::Scanner, "Handwriting Scanner"),
        (Page::Upload, "Upload"),
    ];

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }

        div { class: "app-shell",
            header { class: "app-header",
                h1 {
                    class: "app-title",
                    onclick: move |_| *CURRENT_PAGE.write() = Page::Notes,
                    "NoteNexus"
                    span { class: "app-title-accent", ".ai" }
                }

                nav { class: "header-nav",
                    for (target, label) in nav {
                        button {
                            key: "{label}",
                            class: if page == target { "nav-link active" } else { "nav-link" },
                            onclick: move |_| *CURRENT_PAGE.write() = target,
                            "{label}"
                        }
                    }
                }

                div { class: "header-controls",
                    if let Some(s) = session {
                        span { class: "user-name", "{s.user.name}" }
                        button {
                            class: "btn-secondary",
                            onclick: move |_| {
                                tracing::info!("Signed out");
                                *SESSION.write() = None;
                            },
                            "Sign out"
                        }
                    } else {
                        button {
                            class: "btn-secondary",
                            onclick: move |_| *CURRENT_PAGE.write() = Page::Login,
                            "Sign in"
                        }
                    }
                }
            }

            match page {
                Page::Notes => rsx! { SearchBar { key: "{\"notes-search\"}", catalog: Catalog::Notes } },
                Page::Quizzes => rsx! { SearchBar { key: "{\"quiz-search\"}", catalog: Catalog::Quizzes } },
                _ => rsx! {},
            }

            main { class: "app-main",
                match page {
                    Page::Notes => rsx! { NotesBrowser {} },
                    Page::Quizzes => rsx! { QuizBrowser {} },
                    Page::Generator => rsx! { QuizGenerator {} },
                    Page::Scanner => rsx! { HandwritingScanner {} },
                    Page::Upload => rsx! { UploadForm {} },
                    Page::Login => rsx! { LoginForm {} },
                }
            }

            Chatbot {}
            ToastStack {}
        }
    }
}
