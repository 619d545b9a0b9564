#![allow(non_snake_case)]

use dioxus::prelude::*;
use notes_common::auth::authorize;

use super::now_secs;
use crate::state::{push_toast, Page, CURRENT_PAGE, SESSION};

#[component]
pub fn LoginForm() -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let mut submit = move || {
        let result = authorize(&username.peek(), &password.peek(), now_secs());
        match result {
            Ok(session) => {
                push_toast("Welcome back", format!("Signed in as {}", session.user.name), false);
                *SESSION.write() = Some(session);
                *CURRENT_PAGE.write() = Page::Notes;
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        div { class: "login",
            h2 { "Sign in" }
            p { class: "text-secondary", "Demo account: user / password" }
            if let Some(message) = error.read().as_ref() {
                p { class: "form-error", "{message}" }
            }
            label { "Username"
                input {
                    r#type: "text",
                    value: "{username}",
                    oninput: move |e: Event<FormData>| username.set(e.value()),
                }
            }
            label { "Password"
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e: Event<FormData>| password.set(e.value()),
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter {
                            submit();
                        }
                    },
                }
            }
            button { class: "btn-primary", onclick: move |_| submit(), "Sign in" }
        }
    }
}
