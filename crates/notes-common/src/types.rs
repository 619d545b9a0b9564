use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use std::time::Duration;

use crate::error::NotesError;

/// Which catalog a content item belongs to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Note,
    Quiz,
}

/// A displayable unit (note or quiz listing) in a catalog view.
///
/// For notes `secondary_category` is the university; for quizzes it is the
/// difficulty tier. `score` is the 0.0-5.0 rating for both, `popularity` is
/// downloads or attempts. `recency` is upload order, larger is newer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub id: u32,
    pub kind: ContentKind,
    pub title: String,
    pub category: String,
    pub secondary_category: String,
    pub score: f64,
    pub popularity: u64,
    pub recency: u64,
    pub tags: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl ContentItem {
    /// Fields the free-text query is matched against.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [
            &self.title,
            &self.category,
            &self.secondary_category,
            &self.description,
        ]
    }
}

/// Ordering applied after filtering.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Collection order. Placeholder for a future ranking.
    #[default]
    Relevance,
    Score,
    Popularity,
    Recency,
    Oldest,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::Score,
        SortKey::Popularity,
        SortKey::Recency,
        SortKey::Oldest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Score => "score",
            SortKey::Popularity => "popularity",
            SortKey::Recency => "recency",
            SortKey::Oldest => "oldest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Score => "Highest Rated",
            SortKey::Popularity => "Most Downloaded",
            SortKey::Recency => "Newest First",
            SortKey::Oldest => "Oldest First",
        }
    }
}

impl FromStr for SortKey {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| NotesError::invalid_input(format!("unknown sort key '{}'", s)))
    }
}

/// Active predicates narrowing a catalog view. Empty selection sets match
/// everything.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub selected_categories: BTreeSet<String>,
    pub selected_secondary: BTreeSet<String>,
    pub min_score: f64,
    pub sort: SortKey,
}

impl FilterState {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Checkbox semantics: add when absent, remove when present.
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.selected_categories, category);
    }

    pub fn toggle_secondary(&mut self, value: &str) {
        toggle(&mut self.selected_secondary, value);
    }

    /// "Clear filters": back to defaults, sort included.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        self.query.trim().is_empty()
            && self.selected_categories.is_empty()
            && self.selected_secondary.is_empty()
            && self.min_score <= 0.0
            && self.sort == SortKey::default()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// One question of a quiz. `correct_option` indexes into `options`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub explanation: String,
}

/// Difficulty tier used by the quiz bank and the generator.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// A playable quiz with its question set.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Quiz {
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub time_limit_minutes: u32,
    pub author: String,
    pub rating: f64,
    pub attempts: u64,
    pub description: String,
    pub tags: Vec<String>,
    pub questions: Vec<QuizQuestion>,
}

/// Timing and paging knobs. Defaults match the site's simulated delays.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProgressSettings {
    pub step: u8,
    pub summarize_ms: u64,
    pub scan_ms: u64,
    pub generate_ms: u64,
    pub upload_ms: u64,
    pub suggestion_debounce_ms: u64,
    pub chat_reply_ms: u64,
    pub page_size: usize,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            step: 5,
            summarize_ms: 2_000,
            scan_ms: 2_000,
            generate_ms: 4_000,
            upload_ms: 4_000,
            suggestion_debounce_ms: 300,
            chat_reply_ms: 1_000,
            page_size: 6,
        }
    }
}

impl ProgressSettings {
    pub fn suggestion_debounce(&self) -> Duration {
        Duration::from_millis(self.suggestion_debounce_ms)
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_ms)
    }
}
