#![allow(dead_code)]

use notes_common::types::{ContentItem, ContentKind, QuizQuestion};

/// Build a note item with the fields the filter looks at.
pub fn note(
    id: u32,
    title: &str,
    category: &str,
    secondary: &str,
    score: f64,
    popularity: u64,
) -> ContentItem {
    ContentItem {
        id,
        kind: ContentKind::Note,
        title: title.to_string(),
        category: category.to_string(),
        secondary_category: secondary.to_string(),
        score,
        popularity,
        recency: id as u64,
        tags: Vec::new(),
        description: String::new(),
        author: None,
    }
}

/// Small mixed catalog: two Computer Science notes, one of which mentions
/// databases only in its description.
pub fn small_catalog() -> Vec<ContentItem> {
    let mut dbms = note(
        1,
        "Database Management Systems",
        "Computer Science",
        "Punjab Technical University",
        4.8,
        2345,
    );
    dbms.description = "Relational concepts and SQL".to_string();

    let algos = note(2, "Advanced Algorithms", "Computer Science", "IIT Roorkee", 4.9, 1987);

    let mut marketing = note(
        3,
        "Marketing Management",
        "Business Administration",
        "Himachal Pradesh University",
        4.7,
        1756,
    );
    marketing.description = "Consumer behavior and database marketing".to_string();

    let bio = note(4, "Introduction to Biotechnology", "Biotechnology", "IIT Roorkee", 4.6, 1543);

    vec![dbms, algos, marketing, bio]
}

/// Question whose correct answer is `correct` out of `option_count` options.
pub fn question(id: u32, option_count: usize, correct: usize) -> QuizQuestion {
    QuizQuestion {
        id,
        prompt: format!("Question {}", id),
        options: (0..option_count).map(|i| format!("Option {}", i)).collect(),
        correct_option: correct,
        explanation: format!("Explanation {}", id),
    }
}

/// `n` four-option questions, all answered correctly by option 1.
pub fn questions(n: u32) -> Vec<QuizQuestion> {
    (1..=n).map(|id| question(id, 4, 1)).collect()
}
