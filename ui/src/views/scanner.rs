#![allow(non_snake_case)]

use dioxus::prelude::*;
use notes_common::progress::ProgressPhase;
use notes_common::responses::SCANNED_TEXT;
use notes_common::upload::SelectedFile;

use super::copy_to_clipboard;
use super::progress::{use_progress, ProgressBar};
use crate::state::{push_toast, SETTINGS};

#[component]
pub fn HandwritingScanner() -> Element {
    let mut image = use_signal(|| None::<SelectedFile>);
    let progress = use_progress::<String>();

    let phase = *progress.phase.read();
    let percent = *progress.percent.read();
    let scanned = progress.result();

    let scan = {
        let progress = progress.clone();
        move |_: MouseEvent| {
            let total = SETTINGS.peek().scan_ms;
            progress.start(total, SCANNED_TEXT.to_string(), |_| {
                push_toast("Scan complete", "Your handwritten notes have been digitized.", false);
            });
        }
    };
    let start_over = {
        let progress = progress.clone();
        move |_: MouseEvent| {
            progress.reset();
            image.set(None);
        }
    };

    rsx! {
        div { class: "scanner",
            h2 { "Handwriting Scanner" }
            p { class: "text-secondary", "Convert photos of handwritten notes into editable text." }

            match (phase, scanned) {
                (ProgressPhase::Running, _) => rsx! {
                    ProgressBar { percent, label: "Scanning handwriting...".to_string() }
                },
                (ProgressPhase::Complete, Some(text)) => {
                    let copied = text.clone();
                    rsx! {
                        div { class: "scan-result",
                            textarea { rows: "16", readonly: true, value: "{text}" }
                            div { class: "attempt-nav",
                                button {
                                    class: "btn-secondary",
                                    onclick: move |_| {
                                        copy_to_clipboard(&copied);
                                        push_toast("Copied", "Text copied to clipboard.", false);
                                    },
                                    "Copy text"
                                }
                                button { class: "btn-primary", onclick: start_over, "Scan another" }
                            }
                        }
                    }
                }
                _ => rsx! {
                    div { class: "dropzone",
                        input {
                            r#type: "file",
                            accept: "image/*",
                            onchange: move |e: Event<FormData>| {
                                let picked = e
                                    .files()
                                    .into_iter()
                                    .next()
                                    .map(|f| SelectedFile::from_name(f.name(), f.size()));
                                match picked {
                                    Some(file) if file.mime.starts_with("image/") => image.set(Some(file)),
                                    Some(_) => push_toast("Invalid file type", "Please select an image.", true),
                                    None => {}
                                }
                            },
                        }
                        if let Some(file) = image.read().as_ref() {
                            p { "Selected: {file.name}" }
                        }
                        button {
                            class: "btn-primary",
                            disabled: image.read().is_none(),
                            onclick: scan,
                            "Scan notes"
                        }
                    }
                },
            }
        }
    }
}
