#![allow(non_snake_case)]

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use notes_common::responses::{ChatLog, ChatRole, ChatScript};
use notes_common::timer::{TimerId, Timers};

use crate::state::SETTINGS;
use crate::timers::BrowserTimers;

/// Floating assistant. Replies arrive after a short delay to read as typing.
#[component]
pub fn Chatbot() -> Element {
    let mut open = use_signal(|| false);
    let mut log = use_signal(ChatLog::default);
    let mut input = use_signal(String::new);
    let mut typing = use_signal(|| false);
    let pending = use_hook(|| Rc::new(Cell::new(None::<TimerId>)));
    let script = use_hook(|| Rc::new(ChatScript::default()));
    let timers = use_hook(BrowserTimers::new);

    use_drop({
        let timers = timers.clone();
        let pending = Rc::clone(&pending);
        move || {
            if let Some(id) = pending.take() {
                timers.clear(id);
            }
        }
    });

    let mut send = {
        let timers = timers.clone();
        move || {
            let message = input.peek().clone();
            let Some(reply) = script.reply_to(&message).map(str::to_string) else {
                return;
            };
            if !log.write().push_user(&message) {
                return;
            }
            input.set(String::new());
            // One reply in flight at a time; a newer message supersedes it.
            if let Some(id) = pending.take() {
                timers.clear(id);
            }
            let slot = Rc::clone(&pending);
            let id = timers.set_timeout(
                SETTINGS.peek().chat_reply_delay(),
                Box::new(move || {
                    slot.set(None);
                    typing.set(false);
                    log.write().push_bot(&reply);
                }),
            );
            pending.set(Some(id));
            typing.set(true);
        }
    };

    let is_typing = *typing.read();

    rsx! {
        div { class: "chatbot",
            if *open.read() {
                div { class: "chat-window",
                    div { class: "chat-header",
                        span { "NoteNexus Assistant" }
                        button { class: "modal-close", onclick: move |_| open.set(false), "\u{00d7}" }
                    }
                    div { class: "chat-messages",
                        for (i, message) in log.read().messages().iter().enumerate() {
                            div {
                                key: "{i}",
                                class: match message.role {
                                    ChatRole::Bot => "chat-message bot",
                                    ChatRole::User => "chat-message user",
                                },
                                "{message.content}"
                            }
                        }
                        if is_typing {
                            div { class: "chat-message bot typing", "..." }
                        }
                    }
                    div { class: "chat-input",
                        input {
                            r#type: "text",
                            placeholder: "Ask me anything...",
                            value: "{input}",
                            oninput: move |e: Event<FormData>| input.set(e.value()),
                            onkeydown: {
                                let mut send = send.clone();
                                move |e: Event<KeyboardData>| {
                                    if e.key() == Key::Enter {
                                        send();
                                    }
                                }
                            },
                        }
                        button { class: "btn-primary", onclick: move |_| send(), "Send" }
                    }
                }
            } else {
                button { class: "chat-toggle", onclick: move |_| open.set(true), "Chat" }
            }
        }
    }
}
