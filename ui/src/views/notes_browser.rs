#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use notes_common::catalog;
use notes_common::filter::{distinct_categories, distinct_secondary, filter_and_sort, paginate};
use notes_common::progress::ProgressPhase;
use notes_common::responses::{canned_summary, Summary};
use notes_common::tags::TagStyles;
use notes_common::types::ContentItem;

use super::filter_panel::{FilterPanel, SortSelect};
use super::loaded_or_empty;
use super::note_card::NoteCard;
use super::progress::{use_progress, ProgressBar};
use crate::state::{Catalog, NOTES_PAGE, NOTE_FILTER, SETTINGS};

#[component]
pub fn NotesBrowser() -> Element {
    let notes = use_hook(|| Rc::new(loaded_or_empty("notes", catalog::sample_notes())));
    let styles = use_hook(|| TagStyles::for_notes().ok().map(Rc::new));
    let mut summarizing = use_signal(|| None::<ContentItem>);

    let filter = NOTE_FILTER.read().clone();
    let page_no = *NOTES_PAGE.read();
    let page_size = SETTINGS.read().page_size;

    let results = match filter_and_sort(&notes, &filter) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("Filter rejected: {}", e);
            Vec::new()
        }
    };
    let page = match paginate(&results, page_no, page_size) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("Pagination rejected: {}", e);
            return rsx! { p { class: "text-secondary", "Nothing to show." } };
        }
    };

    let categories = distinct_categories(&notes);
    let universities = distinct_secondary(&notes);
    let total = page.total_items;
    let plural = if total != 1 { "s" } else { "" };
    let page_label = format!("Page {} of {}", page.page, page.total_pages.max(1));
    let has_previous = page.has_previous();
    let has_next = page.has_next();

    rsx! {
        div { class: "browser",
            FilterPanel { catalog: Catalog::Notes, categories, secondary: universities }

            section { class: "browser-results",
                div { class: "results-header",
                    span { class: "results-count", "{total} note{plural} found" }
                    SortSelect { catalog: Catalog::Notes }
                }

                if page.items.is_empty() {
                    div { class: "directory-empty",
                        p { "No notes match your filters." }
                        p { class: "text-secondary", "Try a different search or clear the filters." }
                    }
                } else {
                    div { class: "card-grid",
                        for note in page.items.iter() {
                            {
                                let tags = note
                                    .tags
                                    .iter()
                                    .map(|t| {
                                        let class = styles
                                            .as_ref()
                                            .map(|s| s.style_for(t).as_class())
                                            .unwrap_or("badge-gray");
                                        (t.clone(), class.to_string())
                                    })
                                    .collect::<Vec<_>>();
                                rsx! {
                                    NoteCard {
                                        key: "{note.id}",
                                        note: note.clone(),
                                        tags,
                                        on_summarize: move |n| summarizing.set(Some(n)),
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "pagination",
                    button {
                        class: "btn-secondary",
                        disabled: !has_previous,
                        onclick: move |_| *NOTES_PAGE.write() = page_no.saturating_sub(1).max(1),
                        "Previous"
                    }
                    span { "{page_label}" }
                    button {
                        class: "btn-secondary",
                        disabled: !has_next,
                        onclick: move |_| *NOTES_PAGE.write() = page_no + 1,
                        "Next"
                    }
                }
            }

            if let Some(note) = summarizing.read().clone() {
                SummaryModal {
                    key: "{note.id}",
                    note,
                    on_close: move |_| summarizing.set(None),
                }
            }
        }
    }
}

/// Runs the summarize ramp on open; closing the modal unmounts it, which
/// cancels the ramp.
#[component]
fn SummaryModal(note: ContentItem, on_close: EventHandler<()>) -> Element {
    let progress = use_progress::<Summary>();
    {
        let progress = progress.clone();
        use_effect(move || {
            let total = SETTINGS.peek().summarize_ms;
            progress.start(total, canned_summary(), |_| {
                tracing::info!("Summary ready");
            });
        });
    }

    let phase = *progress.phase.read();
    let percent = *progress.percent.read();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                div { class: "modal-header",
                    h2 { "AI Summary" }
                    button { class: "modal-close", onclick: move |_| on_close.call(()), "\u{00d7}" }
                }
                p { class: "text-secondary", "{note.title}" }

                match (phase, progress.result()) {
                    (ProgressPhase::Complete, Some(summary)) => rsx! {
                        div { class: "summary",
                            p { "{summary.text}" }
                            h4 { "Key points" }
                            ul {
                                for point in summary.key_points.iter() {
                                    li { key: "{point}", "{point}" }
                                }
                            }
                        }
                    },
                    _ => rsx! {
                        ProgressBar { percent, label: "Analyzing document...".to_string() }
                    },
                }
            }
        }
    }
}
