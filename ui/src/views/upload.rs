#![allow(non_snake_case)]

use dioxus::prelude::*;
use notes_common::progress::ProgressPhase;
use notes_common::upload::{format_file_size, SelectedFile, UploadDraft, UploadStep};

use super::progress::{use_progress, ProgressBar, ProgressHandle};
use crate::state::{push_toast, toast_error, SETTINGS};

fn picked_files(e: &Event<FormData>) -> Vec<SelectedFile> {
    e.files()
        .into_iter()
        .map(|f| SelectedFile::from_name(f.name(), f.size()))
        .collect()
}

fn start_upload(progress: &ProgressHandle<String>, mut draft: Signal<UploadDraft>) {
    if !draft.peek().is_ready() {
        push_toast("Missing information", "Complete every step before uploading.", true);
        return;
    }
    let title = draft.peek().title.clone();
    let total = SETTINGS.peek().upload_ms;
    progress.start(total, title, move |title| {
        tracing::info!("Uploaded \"{}\"", title);
        push_toast("Upload successful", format!("\"{}\" is now available.", title), false);
        draft.set(UploadDraft::default());
    });
}

#[component]
pub fn UploadForm() -> Element {
    let mut draft = use_signal(UploadDraft::default);
    let mut tag_input = use_signal(String::new);
    let progress = use_progress::<String>();

    let current = draft.read().clone();
    let total_size = format_file_size(current.total_size());
    let file_count = current.files.len();
    let phase = *progress.phase.read();
    let percent = *progress.percent.read();
    let failure = match phase {
        ProgressPhase::Failed => Some(progress.error().unwrap_or_default()),
        _ => None,
    };

    let upload = {
        let progress = progress.clone();
        move |_: MouseEvent| start_upload(&progress, draft)
    };
    let retry = {
        let progress = progress.clone();
        move |_: MouseEvent| start_upload(&progress, draft)
    };
    let stop = {
        let progress = progress.clone();
        move |_: MouseEvent| progress.fail("The upload was interrupted before it finished.")
    };
    let back_to_form = {
        let progress = progress.clone();
        move |_: MouseEvent| progress.reset()
    };

    let tabs = [
        (UploadStep::Files, "1. Files"),
        (UploadStep::Details, "2. Details"),
        (UploadStep::Preview, "3. Preview"),
    ];

    rsx! {
        div { class: "upload",
            h2 { "Upload Notes" }

            div { class: "tabs",
                for (step, label) in tabs {
                    span {
                        key: "{label}",
                        class: if step == current.step { "tab active" } else { "tab" },
                        "{label}"
                    }
                }
            }

            if phase == ProgressPhase::Running {
                ProgressBar { percent, label: "Uploading...".to_string() }
                button { class: "btn-secondary", onclick: stop, "Cancel upload" }
            } else if let Some(reason) = failure {
                div { class: "upload-failed",
                    h3 { "Upload Failed" }
                    p { class: "form-error", "{reason}" }
                    div { class: "attempt-nav",
                        button { class: "btn-secondary", onclick: back_to_form, "Edit details" }
                        button { class: "btn-primary", onclick: retry, "Try Again" }
                    }
                }
            } else {
                match current.step {
                    UploadStep::Files => rsx! {
                        div { class: "dropzone",
                            input {
                                r#type: "file",
                                multiple: true,
                                accept: ".pdf,.doc,.docx,.ppt,.pptx",
                                onchange: move |e: Event<FormData>| {
                                    if let Err(err) = draft.write().add_files(picked_files(&e)) {
                                        toast_error(&err);
                                    }
                                },
                            }
                            p { class: "text-secondary", "PDF, Word, or PowerPoint" }
                        }
                        ul { class: "file-list",
                            for (i, file) in current.files.iter().enumerate() {
                                {
                                    let kind = file.kind().map(|k| k.label()).unwrap_or("Unknown");
                                    let size = format_file_size(file.size);
                                    rsx! {
                                        li { key: "{i}-{file.name}",
                                            span { "{file.name}" }
                                            span { class: "text-secondary", "{kind} \u{00b7} {size}" }
                                            button {
                                                class: "link-btn",
                                                onclick: move |_| draft.write().remove_file(i),
                                                "Remove"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        if !current.files.is_empty() {
                            p { class: "text-secondary", "Total: {total_size}" }
                        }
                    },
                    UploadStep::Details => rsx! {
                        div { class: "generator-form",
                            label { "Title"
                                input {
                                    value: "{current.title}",
                                    oninput: move |e: Event<FormData>| draft.write().title = e.value(),
                                }
                            }
                            label { "Subject"
                                input {
                                    value: "{current.subject}",
                                    oninput: move |e: Event<FormData>| draft.write().subject = e.value(),
                                }
                            }
                            label { "University"
                                input {
                                    value: "{current.university}",
                                    oninput: move |e: Event<FormData>| draft.write().university = e.value(),
                                }
                            }
                            label { "Description"
                                textarea {
                                    rows: "4",
                                    value: "{current.description}",
                                    oninput: move |e: Event<FormData>| draft.write().description = e.value(),
                                }
                            }
                            label { "Tags"
                                input {
                                    value: "{tag_input}",
                                    placeholder: "Press Enter to add",
                                    oninput: move |e: Event<FormData>| tag_input.set(e.value()),
                                    onkeydown: move |e: Event<KeyboardData>| {
                                        if e.key() == Key::Enter {
                                            let raw = tag_input.peek().clone();
                                            if draft.write().add_tag(&raw) {
                                                tag_input.set(String::new());
                                            }
                                        }
                                    },
                                }
                            }
                            div { class: "note-card-tags",
                                for tag in current.tags.iter() {
                                    {
                                        let removed = tag.clone();
                                        rsx! {
                                            span { key: "{tag}", class: "badge badge-gray",
                                                "{tag} "
                                                button {
                                                    class: "link-btn",
                                                    onclick: move |_| draft.write().remove_tag(&removed),
                                                    "\u{00d7}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            label { class: "filter-option",
                                input {
                                    r#type: "checkbox",
                                    checked: current.is_private,
                                    onchange: move |e: Event<FormData>| draft.write().is_private = e.checked(),
                                }
                                span { "Private (only visible to you)" }
                            }
                            label { "Cover image (optional)"
                                input {
                                    r#type: "file",
                                    accept: "image/*",
                                    onchange: move |e: Event<FormData>| {
                                        if let Some(file) = picked_files(&e).into_iter().next() {
                                            if let Err(err) = draft.write().set_cover_image(file) {
                                                toast_error(&err);
                                            }
                                        }
                                    },
                                }
                            }
                            if let Some(cover) = current.cover_image.as_ref() {
                                p {
                                    "Cover: {cover.name} "
                                    button {
                                        class: "link-btn",
                                        onclick: move |_| draft.write().remove_cover_image(),
                                        "Remove"
                                    }
                                }
                            }
                        }
                    },
                    UploadStep::Preview => rsx! {
                        div { class: "note-card",
                            h3 { class: "note-card-title", "{current.title}" }
                            p { class: "note-card-university", "{current.subject} \u{00b7} {current.university}" }
                            p { class: "note-card-preview", "{current.description}" }
                            p { class: "text-secondary",
                                "{file_count} file(s), {total_size}"
                            }
                            if current.is_private {
                                span { class: "badge badge-gray", "Private" }
                            }
                        }
                    },
                }

                div { class: "attempt-nav",
                    button {
                        class: "btn-secondary",
                        disabled: current.step == UploadStep::Files,
                        onclick: move |_| draft.write().previous_step(),
                        "Back"
                    }
                    if current.step == UploadStep::Preview {
                        button { class: "btn-primary", onclick: upload, "Upload" }
                    } else {
                        button {
                            class: "btn-primary",
                            onclick: move |_| {
                                if let Err(err) = draft.write().next_step() {
                                    toast_error(&err);
                                }
                            },
                            "Continue"
                        }
                    }
                }
            }
        }
    }
}
