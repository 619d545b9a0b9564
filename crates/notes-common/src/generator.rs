use std::str::FromStr;

use crate::error::{NotesError, Result};
use crate::quiz::{QuizAttempt, QuizStage};
use crate::types::QuizQuestion;

pub const QUESTION_COUNTS: [u32; 4] = [5, 10, 15, 20];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeneratorDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl GeneratorDifficulty {
    pub const ALL: [GeneratorDifficulty; 3] = [
        GeneratorDifficulty::Easy,
        GeneratorDifficulty::Medium,
        GeneratorDifficulty::Hard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GeneratorDifficulty::Easy => "easy",
            GeneratorDifficulty::Medium => "medium",
            GeneratorDifficulty::Hard => "hard",
        }
    }
}

impl FromStr for GeneratorDifficulty {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self> {
        GeneratorDifficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| NotesError::invalid_input(format!("unknown difficulty '{}'", s)))
    }
}

/// What the user asked the generator for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRequest {
    pub topic: String,
    pub notes: String,
    pub difficulty: GeneratorDifficulty,
    pub question_count: u32,
}

impl Default for QuizRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            notes: String::new(),
            difficulty: GeneratorDifficulty::default(),
            question_count: 10,
        }
    }
}

impl QuizRequest {
    /// A topic or pasted notes is required; the count must be one offered.
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() && self.notes.trim().is_empty() {
            return Err(NotesError::validation(
                "Input required",
                "Please enter a topic or upload notes to generate a quiz.",
            ));
        }
        if !QUESTION_COUNTS.contains(&self.question_count) {
            return Err(NotesError::invalid_input(format!(
                "question count {} is not one of {:?}",
                self.question_count, QUESTION_COUNTS
            )));
        }
        Ok(())
    }
}

/// Screens of the generator modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeneratorStep {
    #[default]
    Input,
    Generating,
    Quiz,
    Results,
}

/// input -> generating -> quiz -> results, with retake and new-quiz exits.
#[derive(Clone, Debug, Default)]
pub struct GeneratorFlow {
    step: GeneratorStep,
    pub request: QuizRequest,
    attempt: Option<QuizAttempt>,
}

impl GeneratorFlow {
    pub fn step(&self) -> GeneratorStep {
        self.step
    }

    pub fn attempt(&self) -> Option<&QuizAttempt> {
        self.attempt.as_ref()
    }

    pub fn attempt_mut(&mut self) -> Option<&mut QuizAttempt> {
        self.attempt.as_mut()
    }

    /// Validate the request and enter the generating screen.
    pub fn begin(&mut self) -> Result<()> {
        self.request.validate()?;
        self.step = GeneratorStep::Generating;
        Ok(())
    }

    /// Called when the generation ramp completes with its question set.
    pub fn finish_generation(&mut self, questions: Vec<QuizQuestion>) -> Result<()> {
        if self.step != GeneratorStep::Generating {
            return Err(NotesError::invalid_input("generation was not in progress"));
        }
        self.attempt = Some(QuizAttempt::new(questions)?);
        self.step = GeneratorStep::Quiz;
        Ok(())
    }

    /// Advance the attempt; leaving the last question shows results.
    pub fn next_question(&mut self) {
        if let Some(attempt) = self.attempt.as_mut() {
            attempt.next();
            if attempt.stage() == QuizStage::Results {
                self.step = GeneratorStep::Results;
            }
        }
    }

    pub fn previous_question(&mut self) {
        if let Some(attempt) = self.attempt.as_mut() {
            attempt.previous();
        }
    }

    /// Same questions, answers cleared.
    pub fn retake(&mut self) {
        if let Some(attempt) = self.attempt.as_mut() {
            attempt.retake();
            self.step = GeneratorStep::Quiz;
        }
    }

    /// Back to an empty input form.
    pub fn new_quiz(&mut self) {
        *self = Self::default();
    }

    /// Abandon generation (modal closed or cancelled).
    pub fn abort_generation(&mut self) {
        if self.step == GeneratorStep::Generating {
            self.step = GeneratorStep::Input;
        }
    }
}
