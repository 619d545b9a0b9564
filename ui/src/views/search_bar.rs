#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use notes_common::suggestions::SuggestionPanel;
use notes_common::timer::Debouncer;
use notes_common::voice::{VoiceCommands, VoiceState};
use wasm_bindgen::JsValue;

use crate::state::{remember_search, Catalog, NOTES_PAGE, SEARCH_HISTORY, SETTINGS};
use crate::timers::BrowserTimers;

fn speech_recognition_available() -> bool {
    web_sys::window()
        .map(|w| {
            js_sys::Reflect::has(&w, &JsValue::from_str("SpeechRecognition")).unwrap_or(false)
                || js_sys::Reflect::has(&w, &JsValue::from_str("webkitSpeechRecognition"))
                    .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Filter the catalog by `query` as typed.
fn set_query(catalog: Catalog, query: &str) {
    catalog.filter().write().query = query.to_string();
    if catalog == Catalog::Notes {
        *NOTES_PAGE.write() = 1;
    }
}

/// Commit `query` as the catalog's search and remember it.
fn apply_query(catalog: Catalog, query: &str) {
    set_query(catalog, query);
    remember_search(query);
}

#[component]
pub fn SearchBar(catalog: Catalog) -> Element {
    let mut draft = use_signal(|| catalog.filter().peek().query.clone());
    let mut open = use_signal(|| false);
    let mut panel = use_signal(|| SEARCH_HISTORY.peek().panel_for(""));
    let mut voice_state = use_signal(|| VoiceState::Idle);

    let debouncer = use_hook(|| {
        Rc::new(Debouncer::new(
            BrowserTimers::new(),
            SETTINGS.peek().suggestion_debounce(),
        ))
    });
    let voice = use_hook(|| {
        Rc::new(VoiceCommands::new(
            BrowserTimers::new(),
            speech_recognition_available(),
        ))
    });

    let placeholder = match catalog {
        Catalog::Notes => "Search for notes, subjects, universities...",
        Catalog::Quizzes => "Search quizzes by title, subject, or topic...",
    };
    let listening = *voice_state.read() != VoiceState::Idle;
    let voice_supported = voice.is_supported();

    rsx! {
        div { class: "search-section",
            div { class: "search-bar",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{draft}",
                    onfocus: move |_| open.set(true),
                    onblur: move |_| open.set(false),
                    oninput: {
                        let debouncer = Rc::clone(&debouncer);
                        move |e: Event<FormData>| {
                            let value = e.value();
                            draft.set(value.clone());
                            set_query(catalog, &value);
                            debouncer.call(move || {
                                panel.set(SEARCH_HISTORY.peek().panel_for(&value));
                            });
                        }
                    },
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter {
                            apply_query(catalog, &draft.peek());
                            open.set(false);
                        }
                    },
                }
                if !draft.read().is_empty() {
                    button {
                        class: "search-clear",
                        onclick: move |_| {
                            draft.set(String::new());
                            set_query(catalog, "");
                            panel.set(SEARCH_HISTORY.peek().panel_for(""));
                        },
                        "\u{00d7}"
                    }
                }
                if voice_supported {
                    button {
                        class: if listening { "voice-btn listening" } else { "voice-btn" },
                        title: "Search by voice",
                        onclick: {
                            let voice = Rc::clone(&voice);
                            move |_| {
                                voice.toggle(move |query| {
                                    draft.set(query.clone());
                                    apply_query(catalog, &query);
                                    voice_state.set(VoiceState::Idle);
                                });
                                voice_state.set(voice.state());
                            }
                        },
                        if listening { "Listening..." } else { "\u{1F3A4}" }
                    }
                }
                button {
                    class: "btn-primary",
                    onclick: move |_| apply_query(catalog, &draft.peek()),
                    "Search"
                }
            }

            if *open.read() {
                SuggestionDropdown {
                    panel: panel.read().clone(),
                    on_pick: move |query: String| {
                        draft.set(query.clone());
                        apply_query(catalog, &query);
                        open.set(false);
                    },
                }
            }
        }
    }
}

#[component]
fn SuggestionDropdown(panel: SuggestionPanel, on_pick: EventHandler<String>) -> Element {
    // mousedown fires before the input's blur closes the dropdown.
    match panel {
        SuggestionPanel::Suggestions(items) if items.is_empty() => rsx! {},
        SuggestionPanel::Suggestions(items) => rsx! {
            ul { class: "suggestions",
                for item in items {
                    {
                        let picked = item.clone();
                        rsx! {
                            li {
                                key: "{item}",
                                onmousedown: move |_| on_pick.call(picked.clone()),
                                "{item}"
                            }
                        }
                    }
                }
            }
        },
        SuggestionPanel::Browse { trending, recent } => rsx! {
            div { class: "suggestions browse",
                div { class: "suggestion-group",
                    h4 { "Trending" }
                    for item in trending {
                        {
                            let picked = item.clone();
                            rsx! {
                                button {
                                    key: "t-{item}",
                                    class: "chip",
                                    onmousedown: move |_| on_pick.call(picked.clone()),
                                    "{item}"
                                }
                            }
                        }
                    }
                }
                if !recent.is_empty() {
                    div { class: "suggestion-group",
                        h4 { "Recent searches" }
                        for item in recent {
                            {
                                let picked = item.clone();
                                rsx! {
                                    button {
                                        key: "r-{item}",
                                        class: "chip",
                                        onmousedown: move |_| on_pick.call(picked.clone()),
                                        "{item}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}
