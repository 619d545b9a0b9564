pub mod chatbot;
pub mod filter_panel;
pub mod generator;
pub mod login;
pub mod note_card;
pub mod notes_browser;
pub mod progress;
pub mod quiz_browser;
pub mod quiz_player;
pub mod scanner;
pub mod search_bar;
pub mod toast;
pub mod upload;

/// Log a failed load of bundled content and fall back to nothing.
pub fn loaded_or_empty<T: Default>(what: &str, result: notes_common::Result<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!("Failed to load {}: {}", what, e);
        T::default()
    })
}

/// "2,345"
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Seconds since the epoch, from the browser clock.
pub fn now_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}
