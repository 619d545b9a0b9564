use serde::{Deserialize, Serialize};

use crate::normalization;

/// Maximum suggestions shown under the search box.
pub const MAX_SUGGESTIONS: usize = 5;

pub const TRENDING_SEARCHES: &[&str] = &[
    "Database Management Systems",
    "Marketing Strategies",
    "Biotechnology Fundamentals",
    "Machine Learning Algorithms",
    "Financial Accounting",
];

pub const DEFAULT_RECENT_SEARCHES: &[&str] = &[
    "Computer Networks",
    "Organic Chemistry",
    "Business Ethics",
    "Artificial Intelligence",
];

const TEMPLATES: &[(&str, &str)] = &[
    ("", " notes for B.Tech"),
    ("", " study material"),
    ("", " exam preparation"),
    ("", " practical examples"),
    ("", " lecture notes"),
    ("", " question papers"),
    ("", " concepts explained"),
    ("", " for beginners"),
    ("Advanced ", " topics"),
    ("", " cheat sheet"),
];

/// Templated suggestions for a query longer than one character.
///
/// Each template wraps the raw query, so every candidate contains it; the
/// containment check still runs so reworded templates cannot leak in.
pub fn suggestions_for(query: &str) -> Vec<String> {
    if query.chars().count() <= 1 {
        return Vec::new();
    }
    let folded = normalization::fold_for_search(query);
    TEMPLATES
        .iter()
        .map(|(prefix, suffix)| format!("{}{}{}", prefix, query, suffix))
        .filter(|s| normalization::contains_folded(s, &folded))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// What the dropdown shows for the current query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuggestionPanel {
    /// Query too short: trending plus the user's recent searches.
    Browse {
        trending: Vec<String>,
        recent: Vec<String>,
    },
    Suggestions(Vec<String>),
}

/// Recent-search history, most recent first.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHistory {
    recent: Vec<String>,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self {
            recent: DEFAULT_RECENT_SEARCHES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SearchHistory {
    pub fn recent(&self) -> &[String] {
        &self.recent
    }

    /// Move `query` to the front, dropping an older copy of it.
    pub fn record(&mut self, query: &str) {
        let query = normalization::normalize_text(query);
        if query.is_empty() {
            return;
        }
        self.recent.retain(|q| !q.eq_ignore_ascii_case(&query));
        self.recent.insert(0, query);
        self.recent.truncate(MAX_SUGGESTIONS);
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }

    pub fn panel_for(&self, query: &str) -> SuggestionPanel {
        if query.chars().count() <= 1 {
            SuggestionPanel::Browse {
                trending: TRENDING_SEARCHES.iter().map(|s| s.to_string()).collect(),
                recent: self.recent.clone(),
            }
        } else {
            SuggestionPanel::Suggestions(suggestions_for(query))
        }
    }
}
