//! Sample content bundled with the site.
//!
//! Everything here is embedded at compile time and parsed on demand, so the
//! UI and the CLI see exactly the same collections.

use serde::Deserialize;

use crate::error::{NotesError, Result};
use crate::types::{ContentItem, ContentKind, Quiz, QuizQuestion};

const NOTES_JSON: &str = include_str!("../data/notes.json");
const QUIZ_BANK_JSON: &str = include_str!("../data/quiz_bank.json");
const GENERATED_QUESTIONS_JSON: &str = include_str!("../data/generated_questions.json");

#[derive(Deserialize)]
struct NoteRecord {
    id: u32,
    title: String,
    university: String,
    downloads: u64,
    author: String,
    rating: f64,
    tags: Vec<String>,
    preview: String,
    subject: String,
}

impl From<NoteRecord> for ContentItem {
    fn from(note: NoteRecord) -> Self {
        ContentItem {
            id: note.id,
            kind: ContentKind::Note,
            title: note.title,
            category: note.subject,
            secondary_category: note.university,
            score: note.rating,
            popularity: note.downloads,
            recency: note.id as u64,
            tags: note.tags,
            description: note.preview,
            author: Some(note.author),
        }
    }
}

impl From<&Quiz> for ContentItem {
    fn from(quiz: &Quiz) -> Self {
        ContentItem {
            id: quiz.id,
            kind: ContentKind::Quiz,
            title: quiz.title.clone(),
            category: quiz.category.clone(),
            secondary_category: quiz.difficulty.as_str().to_string(),
            score: quiz.rating,
            popularity: quiz.attempts,
            recency: quiz.id as u64,
            tags: quiz.tags.clone(),
            description: quiz.description.clone(),
            author: Some(quiz.author.clone()),
        }
    }
}

fn parse<'a, T: Deserialize<'a>>(name: &str, json: &'a str) -> Result<T> {
    serde_json::from_str(json)
        .map_err(|e| NotesError::invalid_input(format!("bundled {} is malformed: {}", name, e)))
}

/// Notes shown on the browse page, in upload order.
pub fn sample_notes() -> Result<Vec<ContentItem>> {
    let records: Vec<NoteRecord> = parse("notes", NOTES_JSON)?;
    Ok(records.into_iter().map(ContentItem::from).collect())
}

/// Every playable quiz with its questions. Answer keys are checked here so a
/// broken entry is caught at load instead of mid-attempt.
pub fn quiz_bank() -> Result<Vec<Quiz>> {
    let quizzes: Vec<Quiz> = parse("quiz bank", QUIZ_BANK_JSON)?;
    for quiz in &quizzes {
        check_questions(&quiz.questions)
            .map_err(|e| NotesError::invalid_input(format!("quiz {}: {}", quiz.id, e)))?;
    }
    Ok(quizzes)
}

/// Catalog listing for the quiz browser.
pub fn sample_quizzes() -> Result<Vec<ContentItem>> {
    Ok(quiz_bank()?.iter().map(ContentItem::from).collect())
}

pub fn find_quiz(id: u32) -> Result<Quiz> {
    quiz_bank()?
        .into_iter()
        .find(|q| q.id == id)
        .ok_or_else(|| NotesError::invalid_input(format!("no quiz with id {}", id)))
}

/// The fixed question set the generator "produces".
pub fn generated_questions() -> Result<Vec<QuizQuestion>> {
    let questions: Vec<QuizQuestion> = parse("generated questions", GENERATED_QUESTIONS_JSON)?;
    check_questions(&questions)?;
    Ok(questions)
}

fn check_questions(questions: &[QuizQuestion]) -> Result<()> {
    match questions
        .iter()
        .find(|q| q.correct_option >= q.options.len())
    {
        Some(q) => Err(NotesError::invalid_input(format!(
            "question {} answer index {} out of range",
            q.id, q.correct_option
        ))),
        None => Ok(()),
    }
}
