#![allow(non_snake_case)]

use dioxus::prelude::*;
use notes_common::catalog;
use notes_common::generator::{GeneratorDifficulty, GeneratorFlow, GeneratorStep, QUESTION_COUNTS};
use notes_common::types::QuizQuestion;

use super::progress::{use_progress, ProgressBar};
use super::quiz_player::{AttemptView, ResultsView};
use crate::state::{toast_error, SETTINGS};

#[component]
pub fn QuizGenerator() -> Element {
    let mut flow = use_signal(GeneratorFlow::default);
    let progress = use_progress::<Vec<QuizQuestion>>();

    let step = flow.read().step();
    let percent = *progress.percent.read();

    let generate = {
        let progress = progress.clone();
        move |_: ()| {
            if let Err(e) = flow.write().begin() {
                toast_error(&e);
                return;
            }
            let questions = match catalog::generated_questions() {
                Ok(q) => q,
                Err(e) => {
                    flow.write().abort_generation();
                    toast_error(&e);
                    return;
                }
            };
            let request = flow.peek().request.clone();
            tracing::info!(
                "Generating {} {} questions",
                request.question_count,
                request.difficulty.as_str()
            );
            let total = SETTINGS.peek().generate_ms;
            progress.start(total, questions, move |questions| {
                if let Err(e) = flow.write().finish_generation(questions) {
                    toast_error(&e);
                }
            });
        }
    };
    let cancel = {
        let progress = progress.clone();
        move |_: MouseEvent| {
            progress.cancel();
            flow.write().abort_generation();
        }
    };
    let new_quiz = {
        let progress = progress.clone();
        move |_: ()| {
            progress.reset();
            flow.write().new_quiz();
        }
    };

    rsx! {
        div { class: "generator",
            h2 { "AI Quiz Generator" }
            p { class: "text-secondary", "Turn a topic or your notes into a practice quiz." }

            match step {
                GeneratorStep::Input => rsx! { GeneratorForm { flow, on_generate: generate } },
                GeneratorStep::Generating => rsx! {
                    div { class: "generating",
                        ProgressBar { percent, label: "Generating questions...".to_string() }
                        button { class: "btn-secondary", onclick: cancel, "Cancel" }
                    }
                },
                GeneratorStep::Quiz => match flow.read().attempt().cloned() {
                    Some(attempt) => rsx! {
                        AttemptView {
                            attempt,
                            on_select: move |option: usize| {
                                if let Some(a) = flow.write().attempt_mut() {
                                    if let Err(e) = a.select_answer(option) {
                                        toast_error(&e);
                                    }
                                }
                            },
                            on_previous: move |_| flow.write().previous_question(),
                            on_next: move |_| flow.write().next_question(),
                        }
                    },
                    None => rsx! {},
                },
                GeneratorStep::Results => match flow.read().attempt().cloned() {
                    Some(attempt) => rsx! {
                        ResultsView {
                            attempt,
                            on_retake: move |_| flow.write().retake(),
                            on_exit: new_quiz,
                        }
                    },
                    None => rsx! {},
                },
            }
        }
    }
}

#[component]
fn GeneratorForm(mut flow: Signal<GeneratorFlow>, on_generate: EventHandler<()>) -> Element {
    let request = flow.read().request.clone();

    rsx! {
        div { class: "generator-form",
            label { "Topic"
                input {
                    r#type: "text",
                    placeholder: "e.g. Database Normalization",
                    value: "{request.topic}",
                    oninput: move |e: Event<FormData>| flow.write().request.topic = e.value(),
                }
            }
            label { "Or paste your notes"
                textarea {
                    rows: "6",
                    value: "{request.notes}",
                    oninput: move |e: Event<FormData>| flow.write().request.notes = e.value(),
                }
            }
            div { class: "form-row",
                label { "Difficulty"
                    select {
                        value: "{request.difficulty.as_str()}",
                        onchange: move |e: Event<FormData>| {
                            match e.value().parse::<GeneratorDifficulty>() {
                                Ok(d) => flow.write().request.difficulty = d,
                                Err(err) => tracing::warn!("{}", err),
                            }
                        },
                        for d in GeneratorDifficulty::ALL {
                            option {
                                key: "{d.as_str()}",
                                value: "{d.as_str()}",
                                selected: d == request.difficulty,
                                "{d.as_str()}"
                            }
                        }
                    }
                }
                label { "Questions"
                    select {
                        value: "{request.question_count}",
                        onchange: move |e: Event<FormData>| {
                            if let Ok(n) = e.value().parse::<u32>() {
                                flow.write().request.question_count = n;
                            }
                        },
                        for n in QUESTION_COUNTS {
                            option {
                                key: "{n}",
                                value: "{n}",
                                selected: n == request.question_count,
                                "{n}"
                            }
                        }
                    }
                }
            }
            button { class: "btn-primary", onclick: move |_| on_generate.call(()), "Generate quiz" }
        }
    }
}
