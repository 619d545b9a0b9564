use std::collections::HashMap;

use crate::error::{NotesError, Result};

/// Badge color family. `as_class` gives the CSS class the UI renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleToken {
    Purple,
    Blue,
    Yellow,
    Green,
    Red,
    Orange,
    Gray,
}

impl StyleToken {
    pub fn as_class(self) -> &'static str {
        match self {
            StyleToken::Purple => "badge-purple",
            StyleToken::Blue => "badge-blue",
            StyleToken::Yellow => "badge-yellow",
            StyleToken::Green => "badge-green",
            StyleToken::Red => "badge-red",
            StyleToken::Orange => "badge-orange",
            StyleToken::Gray => "badge-gray",
        }
    }
}

pub const NOTE_TAGS: &[&str] = &["AI Summarized", "Verified", "Top Rated", "Popular"];

pub const QUIZ_TAGS: &[&str] = &[
    "Popular",
    "AI Generated",
    "Expert",
    "Beginner Friendly",
    "Comprehensive",
];

const NOTE_TAG_STYLES: &[(&str, StyleToken)] = &[
    ("AI Summarized", StyleToken::Purple),
    ("Verified", StyleToken::Blue),
    ("Top Rated", StyleToken::Yellow),
    ("Popular", StyleToken::Green),
];

const QUIZ_TAG_STYLES: &[(&str, StyleToken)] = &[
    ("Popular", StyleToken::Purple),
    ("AI Generated", StyleToken::Blue),
    ("Expert", StyleToken::Red),
    ("Beginner Friendly", StyleToken::Green),
    ("Comprehensive", StyleToken::Orange),
];

/// Static tag -> style table, checked against the known tag list when built.
///
/// Every known tag must be mapped exactly once and nothing else may be, so a
/// misspelled tag fails construction instead of silently rendering gray.
#[derive(Clone, Debug)]
pub struct TagStyles {
    styles: HashMap<String, StyleToken>,
}

impl TagStyles {
    pub fn new(known: &[&str], entries: &[(&str, StyleToken)]) -> Result<Self> {
        let mut styles = HashMap::with_capacity(entries.len());
        for (tag, token) in entries {
            if !known.contains(tag) {
                return Err(NotesError::invalid_input(format!("unknown tag '{}'", tag)));
            }
            if styles.insert(tag.to_string(), *token).is_some() {
                return Err(NotesError::invalid_input(format!("tag '{}' mapped twice", tag)));
            }
        }
        if let Some(missing) = known.iter().find(|t| !styles.contains_key(**t)) {
            return Err(NotesError::invalid_input(format!("tag '{}' has no style", missing)));
        }
        Ok(Self { styles })
    }

    pub fn for_notes() -> Result<Self> {
        Self::new(NOTE_TAGS, NOTE_TAG_STYLES)
    }

    pub fn for_quizzes() -> Result<Self> {
        Self::new(QUIZ_TAGS, QUIZ_TAG_STYLES)
    }

    /// Unknown labels (e.g. user-entered upload tags) render gray.
    pub fn style_for(&self, tag: &str) -> StyleToken {
        self.styles.get(tag).copied().unwrap_or(StyleToken::Gray)
    }
}

/// Badge style for the quiz listing's difficulty tiers.
pub fn difficulty_style(difficulty: &str) -> StyleToken {
    match difficulty {
        "Easy" | "Beginner" => StyleToken::Green,
        "Medium" | "Intermediate" => StyleToken::Yellow,
        "Hard" | "Advanced" => StyleToken::Red,
        _ => StyleToken::Gray,
    }
}
