#![allow(non_snake_case)]

use dioxus::prelude::*;
use notes_common::auth::Session;
use notes_common::suggestions::SearchHistory;
use notes_common::types::{FilterState, ProgressSettings};

// --- Data types ---

/// Top-level page shown under the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Notes,
    Quizzes,
    Generator,
    Scanner,
    Upload,
    Login,
}

/// Which catalog a filter panel drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Catalog {
    Notes,
    Quizzes,
}

impl Catalog {
    pub fn filter(self) -> &'static GlobalSignal<FilterState> {
        match self {
            Catalog::Notes => &NOTE_FILTER,
            Catalog::Quizzes => &QUIZ_FILTER,
        }
    }

    pub fn category_label(self) -> &'static str {
        match self {
            Catalog::Notes => "Subject",
            Catalog::Quizzes => "Category",
        }
    }

    pub fn secondary_label(self) -> &'static str {
        match self {
            Catalog::Notes => "University",
            Catalog::Quizzes => "Difficulty",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub is_error: bool,
}

// --- Global signals ---

pub static CURRENT_PAGE: GlobalSignal<Page> = Global::new(Page::default);

/// Signed-in demo session, if any
pub static SESSION: GlobalSignal<Option<Session>> = Global::new(|| None);

/// Filters for the notes browser; the header search writes its query here
pub static NOTE_FILTER: GlobalSignal<FilterState> = Global::new(FilterState::default);

pub static QUIZ_FILTER: GlobalSignal<FilterState> = Global::new(FilterState::default);

/// 1-based page of the notes grid
pub static NOTES_PAGE: GlobalSignal<usize> = Global::new(|| 1);

/// Quiz currently being played from the quiz browser
pub static ACTIVE_QUIZ: GlobalSignal<Option<u32>> = Global::new(|| None);

/// Recent searches, restored from localStorage on first read
pub static SEARCH_HISTORY: GlobalSignal<SearchHistory> = Global::new(load_search_history);

pub static SETTINGS: GlobalSignal<ProgressSettings> = Global::new(ProgressSettings::default);

pub static TOASTS: GlobalSignal<Vec<Toast>> = Global::new(Vec::new);

static NEXT_TOAST_ID: GlobalSignal<u64> = Global::new(|| 0);

/// Show a toast. Dismissed by the user from the toast stack.
pub fn push_toast(title: impl Into<String>, description: impl Into<String>, is_error: bool) {
    let id = {
        let mut next = NEXT_TOAST_ID.write();
        *next += 1;
        *next
    };
    TOASTS.write().push(Toast {
        id,
        title: title.into(),
        description: description.into(),
        is_error,
    });
}

/// Toast for a recoverable core error.
pub fn toast_error(err: &notes_common::NotesError) {
    match err {
        notes_common::NotesError::Validation { title, description } => {
            push_toast(title.clone(), description.clone(), true)
        }
        other => push_toast("Something went wrong", other.to_string(), true),
    }
}

pub fn dismiss_toast(id: u64) {
    TOASTS.write().retain(|t| t.id != id);
}

// --- Persistence ---

const SEARCH_HISTORY_KEY: &str = "notenexus_recent_searches";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_search_history() -> SearchHistory {
    let Some(raw) = local_storage().and_then(|s| s.get_item(SEARCH_HISTORY_KEY).ok().flatten())
    else {
        return SearchHistory::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!("Discarding stored search history: {}", e);
        SearchHistory::default()
    })
}

/// Record a committed search and write the history back to localStorage.
pub fn remember_search(query: &str) {
    let history = {
        let mut history = SEARCH_HISTORY.write();
        history.record(query);
        history.clone()
    };
    let Some(storage) = local_storage() else { return };
    match serde_json::to_string(&history) {
        Ok(json) => {
            let _ = storage.set_item(SEARCH_HISTORY_KEY, &json);
        }
        Err(e) => tracing::warn!("Failed to store search history: {}", e),
    }
}
