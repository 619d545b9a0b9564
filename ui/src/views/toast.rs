#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::state::{dismiss_toast, TOASTS};

#[component]
pub fn ToastStack() -> Element {
    let toasts = TOASTS.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: if toast.is_error { "toast error" } else { "toast" },
                    div { class: "toast-body",
                        strong { "{toast.title}" }
                        p { "{toast.description}" }
                    }
                    button {
                        class: "modal-close",
                        onclick: move |_| dismiss_toast(toast.id),
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}
