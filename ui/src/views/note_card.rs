#![allow(non_snake_case)]

use dioxus::prelude::*;
use notes_common::types::ContentItem;

use super::format_count;

/// (label, css class) pairs resolved by the parent from its tag table.
#[component]
pub fn NoteCard(
    note: ContentItem,
    tags: Vec<(String, String)>,
    on_summarize: EventHandler<ContentItem>,
) -> Element {
    let author = note.author.clone().unwrap_or_else(|| "Anonymous".to_string());
    let downloads = format_count(note.popularity);
    let rating = format!("{:.1}", note.score);

    rsx! {
        div { class: "note-card",
            div { class: "note-card-tags",
                for (label, class) in tags {
                    span { key: "{label}", class: "badge {class}", "{label}" }
                }
            }
            h3 { class: "note-card-title", "{note.title}" }
            p { class: "note-card-university", "{note.secondary_category}" }
            p { class: "note-card-preview", "{note.description}" }

            div { class: "note-card-stats",
                span { class: "stat", title: "Rating", "\u{2605} {rating}" }
                span { class: "stat", title: "Downloads", "{downloads} downloads" }
                span { class: "stat", "by {author}" }
            }

            div { class: "note-card-footer",
                span { class: "subject-chip", "{note.category}" }
                button {
                    class: "btn-secondary",
                    onclick: {
                        let note = note.clone();
                        move |_| on_summarize.call(note.clone())
                    },
                    "AI Summary"
                }
            }
        }
    }
}
