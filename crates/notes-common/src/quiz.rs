use std::collections::HashMap;

use crate::error::{NotesError, Result};
use crate::types::QuizQuestion;

/// Where an attempt is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizStage {
    #[default]
    InProgress,
    Results,
}

/// One run through a fixed question set.
///
/// Answers are keyed by question id; a later selection overwrites the earlier
/// one. Questions never change for the lifetime of the attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizAttempt {
    questions: Vec<QuizQuestion>,
    answers: HashMap<u32, usize>,
    current: usize,
    stage: QuizStage,
}

impl QuizAttempt {
    /// Rejects questions whose answer key does not index into their options.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self> {
        for q in &questions {
            if q.correct_option >= q.options.len() {
                return Err(NotesError::invalid_input(format!(
                    "question {} has answer key {} but only {} options",
                    q.id,
                    q.correct_option,
                    q.options.len()
                )));
            }
        }
        Ok(Self {
            questions,
            answers: HashMap::new(),
            current: 0,
            stage: QuizStage::InProgress,
        })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &HashMap<u32, usize> {
        &self.answers
    }

    pub fn answer_for(&self, question_id: u32) -> Option<usize> {
        self.answers.get(&question_id).copied()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    pub fn stage(&self) -> QuizStage {
        self.stage
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn all_answered(&self) -> bool {
        self.questions
            .iter()
            .all(|q| self.answers.contains_key(&q.id))
    }

    /// Record an answer for a question by id.
    pub fn answer(&mut self, question_id: u32, option: usize) -> Result<()> {
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| NotesError::invalid_input(format!("no question {}", question_id)))?;
        if option >= question.options.len() {
            return Err(NotesError::invalid_input(format!(
                "option {} out of range for question {}",
                option, question_id
            )));
        }
        self.answers.insert(question_id, option);
        Ok(())
    }

    /// Record an answer for the question currently on screen.
    pub fn select_answer(&mut self, option: usize) -> Result<()> {
        let id = self
            .current_question()
            .map(|q| q.id)
            .ok_or_else(|| NotesError::invalid_input("quiz has no questions"))?;
        self.answer(id, option)
    }

    /// Advance; past the last question the whole attempt moves to results.
    pub fn next(&mut self) {
        if self.stage == QuizStage::Results {
            return;
        }
        if self.is_last_question() {
            self.stage = QuizStage::Results;
        } else {
            self.current += 1;
        }
    }

    /// Step back; a no-op on the first question.
    pub fn previous(&mut self) {
        if self.stage == QuizStage::InProgress && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Submit straight to results regardless of position.
    pub fn submit(&mut self) {
        self.stage = QuizStage::Results;
    }

    /// Clear every answer and return to the first question with the same set.
    pub fn retake(&mut self) {
        self.answers.clear();
        self.current = 0;
        self.stage = QuizStage::InProgress;
    }

    /// Progress through the question set as a 0-100 percentage, for the bar
    /// above the question card.
    pub fn position_percent(&self) -> u8 {
        if self.questions.is_empty() {
            return 0;
        }
        (((self.current + 1) * 100) / self.questions.len()).min(100) as u8
    }
}
