#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use notes_common::catalog;
use notes_common::filter::{distinct_categories, distinct_secondary, filter_and_sort};
use notes_common::tags::{difficulty_style, TagStyles};
use notes_common::types::ContentItem;

use super::filter_panel::{FilterPanel, SortSelect};
use super::quiz_player::QuizPlayer;
use super::{format_count, loaded_or_empty};
use crate::state::{Catalog, ACTIVE_QUIZ, QUIZ_FILTER};

#[component]
pub fn QuizBrowser() -> Element {
    let bank = use_hook(|| Rc::new(loaded_or_empty("quiz bank", catalog::quiz_bank())));
    let listing = use_hook(|| Rc::new(bank.iter().map(ContentItem::from).collect::<Vec<_>>()));
    let styles = use_hook(|| TagStyles::for_quizzes().ok().map(Rc::new));

    if let Some(id) = *ACTIVE_QUIZ.read() {
        if let Some(quiz) = bank.iter().find(|q| q.id == id).cloned() {
            return rsx! {
                QuizPlayer {
                    key: "{id}",
                    quiz,
                    on_exit: move |_| *ACTIVE_QUIZ.write() = None,
                }
            };
        }
        tracing::warn!("Quiz {} is not in the bank", id);
    }

    let filter = QUIZ_FILTER.read().clone();
    let results = filter_and_sort(&listing, &filter).unwrap_or_else(|e| {
        tracing::warn!("Filter rejected: {}", e);
        Vec::new()
    });
    let categories = distinct_categories(&listing);
    let tiers = distinct_secondary(&listing);
    let total = results.len();
    let plural = if total != 1 { "zes" } else { "" };

    rsx! {
        div { class: "browser",
            FilterPanel { catalog: Catalog::Quizzes, categories, secondary: tiers }

            section { class: "browser-results",
                div { class: "results-header",
                    span { class: "results-count", "{total} quiz{plural} found" }
                    SortSelect { catalog: Catalog::Quizzes }
                }

                if results.is_empty() {
                    div { class: "directory-empty",
                        p { "No quizzes match your filters." }
                    }
                } else {
                    div { class: "card-grid",
                        for quiz in results.iter() {
                            {
                                let id = quiz.id;
                                let difficulty_class = difficulty_style(&quiz.secondary_category).as_class();
                                let attempts = format_count(quiz.popularity);
                                let rating = format!("{:.1}", quiz.score);
                                let author = quiz.author.clone().unwrap_or_default();
                                let tags = quiz
                                    .tags
                                    .iter()
                                    .map(|t| {
                                        let class = styles
                                            .as_ref()
                                            .map(|s| s.style_for(t).as_class())
                                            .unwrap_or("badge-gray");
                                        (t.clone(), class)
                                    })
                                    .collect::<Vec<_>>();
                                rsx! {
                                    div { key: "{id}", class: "quiz-card",
                                        div { class: "note-card-tags",
                                            span { class: "badge {difficulty_class}", "{quiz.secondary_category}" }
                                            for (label, class) in tags {
                                                span { key: "{label}", class: "badge {class}", "{label}" }
                                            }
                                        }
                                        h3 { class: "note-card-title", "{quiz.title}" }
                                        p { class: "note-card-preview", "{quiz.description}" }
                                        div { class: "note-card-stats",
                                            span { class: "stat", "\u{2605} {rating}" }
                                            span { class: "stat", "{attempts} attempts" }
                                            span { class: "stat", "by {author}" }
                                        }
                                        div { class: "note-card-footer",
                                            span { class: "subject-chip", "{quiz.category}" }
                                            button {
                                                class: "btn-primary",
                                                onclick: move |_| {
                                                    tracing::info!("Starting quiz {}", id);
                                                    *ACTIVE_QUIZ.write() = Some(id);
                                                },
                                                "Start quiz"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
