mod fixtures;

use notes_common::catalog;
use notes_common::quiz::{QuizAttempt, QuizStage};
use notes_common::scoring;

#[test]
fn answer_key_out_of_range_is_rejected() {
    let bad = vec![fixtures::question(1, 4, 4)];
    assert!(QuizAttempt::new(bad).is_err());
}

#[test]
fn later_answer_overwrites_earlier() {
    let mut attempt = QuizAttempt::new(fixtures::questions(2)).unwrap();
    attempt.select_answer(0).unwrap();
    attempt.select_answer(1).unwrap();
    assert_eq!(attempt.answer_for(1), Some(1));
    assert_eq!(attempt.answered_count(), 1);
}

#[test]
fn invalid_answers_are_rejected() {
    let mut attempt = QuizAttempt::new(fixtures::questions(2)).unwrap();
    assert!(attempt.answer(1, 4).is_err());
    assert!(attempt.answer(99, 0).is_err());
    assert!(attempt.answers().is_empty());
}

#[test]
fn next_past_last_question_shows_results() {
    let mut attempt = QuizAttempt::new(fixtures::questions(3)).unwrap();
    attempt.next();
    attempt.next();
    assert!(attempt.is_last_question());
    assert_eq!(attempt.stage(), QuizStage::InProgress);
    attempt.next();
    assert_eq!(attempt.stage(), QuizStage::Results);
    assert_eq!(attempt.current_index(), 2);
}

#[test]
fn previous_on_first_question_is_noop() {
    let mut attempt = QuizAttempt::new(fixtures::questions(3)).unwrap();
    attempt.previous();
    assert_eq!(attempt.current_index(), 0);
    attempt.next();
    attempt.previous();
    assert_eq!(attempt.current_index(), 0);
}

#[test]
fn retake_clears_answers_and_keeps_questions() {
    let questions = fixtures::questions(3);
    let mut attempt = QuizAttempt::new(questions.clone()).unwrap();
    attempt.answer(1, 1).unwrap();
    attempt.answer(2, 1).unwrap();
    attempt.submit();
    assert_eq!(attempt.stage(), QuizStage::Results);

    attempt.retake();
    assert_eq!(attempt.stage(), QuizStage::InProgress);
    assert_eq!(attempt.current_index(), 0);
    assert!(attempt.answers().is_empty());
    assert_eq!(attempt.questions(), &questions[..]);
}

#[test]
fn position_percent_tracks_current_question() {
    let mut attempt = QuizAttempt::new(fixtures::questions(4)).unwrap();
    assert_eq!(attempt.position_percent(), 25);
    attempt.next();
    attempt.next();
    attempt.next();
    assert_eq!(attempt.position_percent(), 100);
}

#[test]
fn all_answered_requires_every_question() {
    let mut attempt = QuizAttempt::new(fixtures::questions(2)).unwrap();
    attempt.answer(2, 0).unwrap();
    assert!(!attempt.all_answered());
    attempt.answer(1, 0).unwrap();
    assert!(attempt.all_answered());
}

#[test]
fn bundled_quiz_can_be_completed() {
    let quiz = catalog::find_quiz(1).unwrap();
    let mut attempt = QuizAttempt::new(quiz.questions.clone()).unwrap();
    for q in &quiz.questions {
        attempt.answer(q.id, q.correct_option).unwrap();
    }
    attempt.submit();
    let summary = scoring::score(&attempt).unwrap();
    assert_eq!(summary.percentage, 100);
}

#[test]
fn bundled_collections_load() {
    assert_eq!(catalog::sample_notes().unwrap().len(), 6);
    assert_eq!(catalog::quiz_bank().unwrap().len(), 7);
    assert_eq!(catalog::generated_questions().unwrap().len(), 5);
    assert!(catalog::find_quiz(999).is_err());
}
