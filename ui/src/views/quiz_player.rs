#![allow(non_snake_case)]

use dioxus::prelude::*;
use notes_common::quiz::{QuizAttempt, QuizStage};
use notes_common::scoring::{review, score};
use notes_common::types::{Quiz, QuizQuestion};

use crate::state::toast_error;

#[component]
pub fn QuizPlayer(quiz: Quiz, on_exit: EventHandler<()>) -> Element {
    let mut attempt = use_signal(|| QuizAttempt::new(quiz.questions.clone()));

    let current = attempt.read().clone();
    let attempt_state = match current {
        Ok(a) => a,
        Err(e) => {
            return rsx! {
                div { class: "quiz-player",
                    p { "This quiz can't be played: {e}" }
                    button { class: "btn-secondary", onclick: move |_| on_exit.call(()), "Back to quizzes" }
                }
            };
        }
    };

    rsx! {
        div { class: "quiz-player",
            div { class: "quiz-player-header",
                button { class: "link-btn", onclick: move |_| on_exit.call(()), "\u{2190} Back to quizzes" }
                h2 { "{quiz.title}" }
                p { class: "text-secondary",
                    "{quiz.subject} \u{00b7} {quiz.time_limit_minutes} min \u{00b7} by {quiz.author}"
                }
            }

            match attempt_state.stage() {
                QuizStage::InProgress => rsx! {
                    AttemptView {
                        attempt: attempt_state.clone(),
                        on_select: move |option: usize| {
                            if let Ok(a) = attempt.write().as_mut() {
                                if let Err(e) = a.select_answer(option) {
                                    toast_error(&e);
                                }
                            }
                        },
                        on_previous: move |_| {
                            if let Ok(a) = attempt.write().as_mut() {
                                a.previous();
                            }
                        },
                        on_next: move |_| {
                            if let Ok(a) = attempt.write().as_mut() {
                                a.next();
                            }
                        },
                    }
                },
                QuizStage::Results => rsx! {
                    ResultsView {
                        attempt: attempt_state.clone(),
                        on_retake: move |_| {
                            if let Ok(a) = attempt.write().as_mut() {
                                a.retake();
                            }
                        },
                        on_exit: move |_| on_exit.call(()),
                    }
                },
            }
        }
    }
}

/// Question card with navigation for an attempt in progress.
#[component]
pub fn AttemptView(
    attempt: QuizAttempt,
    on_select: EventHandler<usize>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let Some(question) = attempt.current_question().cloned() else {
        return rsx! { p { "No questions." } };
    };
    let index = attempt.current_index();
    let total = attempt.questions().len();
    let selected = attempt.answer_for(question.id);
    let percent = attempt.position_percent();
    let next_label = if attempt.is_last_question() { "Finish" } else { "Next" };
    let answered = attempt.answered_count();

    rsx! {
        div { class: "attempt",
            div { class: "progress-label",
                span { "Question {index + 1} of {total}" }
                span { "{answered} answered" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {percent}%;" }
            }

            QuestionCard { question, selected, on_select }

            div { class: "attempt-nav",
                button {
                    class: "btn-secondary",
                    disabled: index == 0,
                    onclick: move |_| on_previous.call(()),
                    "Previous"
                }
                button {
                    class: "btn-primary",
                    disabled: selected.is_none(),
                    onclick: move |_| on_next.call(()),
                    "{next_label}"
                }
            }
        }
    }
}

#[component]
fn QuestionCard(
    question: QuizQuestion,
    selected: Option<usize>,
    on_select: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: "question-card",
            h3 { "{question.prompt}" }
            div { class: "options",
                for (i, option) in question.options.iter().enumerate() {
                    button {
                        key: "{i}",
                        class: if selected == Some(i) { "option selected" } else { "option" },
                        onclick: move |_| on_select.call(i),
                        "{option}"
                    }
                }
            }
        }
    }
}

/// Score, per-question review, and the retake / exit actions.
#[component]
pub fn ResultsView(attempt: QuizAttempt, on_retake: EventHandler<()>, on_exit: EventHandler<()>) -> Element {
    let summary = match score(&attempt) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Cannot score attempt: {}", e);
            return rsx! { p { "Nothing to score." } };
        }
    };
    let entries = review(&attempt);
    let incorrect = summary.incorrect();
    let verdict_class = if summary.percentage >= 70 { "score good" } else { "score" };

    rsx! {
        div { class: "results",
            div { class: "{verdict_class}",
                span { class: "score-percent", "{summary.percentage}%" }
                span { "{summary.correct} correct \u{00b7} {incorrect} incorrect \u{00b7} {summary.total} total" }
            }

            div { class: "review",
                for (n, entry) in entries.iter().enumerate() {
                    div {
                        key: "{entry.question_id}",
                        class: if entry.is_correct { "review-entry correct" } else { "review-entry incorrect" },
                        h4 { "{n + 1}. {entry.prompt}" }
                        p { "Your answer: {entry.user_answer}" }
                        if !entry.is_correct {
                            p { "Correct answer: {entry.correct_answer}" }
                        }
                        p { class: "text-secondary", "{entry.explanation}" }
                    }
                }
            }

            div { class: "attempt-nav",
                button { class: "btn-secondary", onclick: move |_| on_exit.call(()), "Done" }
                button { class: "btn-primary", onclick: move |_| on_retake.call(()), "Retake quiz" }
            }
        }
    }
}
