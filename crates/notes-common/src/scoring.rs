use crate::error::{NotesError, Result};
use crate::quiz::QuizAttempt;

/// Literal shown in the review for questions left blank.
pub const NOT_ANSWERED: &str = "not answered";

/// Aggregate result of an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreSummary {
    pub correct: u32,
    pub total: u32,
    pub percentage: u32,
}

impl ScoreSummary {
    /// Wrong or unanswered questions.
    pub fn incorrect(&self) -> u32 {
        self.total - self.correct
    }
}

/// Count correct answers. Unanswered questions count as incorrect.
///
/// percentage = round_half_up(correct * 100 / total), integer arithmetic.
/// A zero-question attempt is a caller error, never a division by zero.
pub fn score(attempt: &QuizAttempt) -> Result<ScoreSummary> {
    let total = attempt.questions().len() as u32;
    if total == 0 {
        return Err(NotesError::invalid_input("cannot score a quiz with no questions"));
    }
    let correct = attempt
        .questions()
        .iter()
        .filter(|q| attempt.answer_for(q.id) == Some(q.correct_option))
        .count() as u32;
    Ok(ScoreSummary {
        correct,
        total,
        percentage: percentage(correct, total),
    })
}

fn percentage(correct: u32, total: u32) -> u32 {
    let scaled = correct as u64 * 100;
    let total = total as u64;
    ((scaled * 2 + total) / (total * 2)) as u32
}

/// Per-question line in the results view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewEntry {
    pub question_id: u32,
    pub prompt: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// Breakdown in question order.
pub fn review(attempt: &QuizAttempt) -> Vec<ReviewEntry> {
    attempt
        .questions()
        .iter()
        .map(|q| {
            let chosen = attempt.answer_for(q.id);
            let user_answer = chosen
                .and_then(|i| q.options.get(i))
                .cloned()
                .unwrap_or_else(|| NOT_ANSWERED.to_string());
            ReviewEntry {
                question_id: q.id,
                prompt: q.prompt.clone(),
                user_answer,
                correct_answer: q.options[q.correct_option].clone(),
                is_correct: chosen == Some(q.correct_option),
                explanation: q.explanation.clone(),
            }
        })
        .collect()
}

