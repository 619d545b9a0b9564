mod fixtures;

use notes_common::quiz::QuizAttempt;
use notes_common::scoring::*;
use notes_common::NotesError;

#[test]
fn four_of_five_is_eighty_percent() {
    let mut attempt = QuizAttempt::new(fixtures::questions(5)).unwrap();
    for id in 1..=4 {
        attempt.answer(id, 1).unwrap();
    }
    attempt.answer(5, 0).unwrap();
    let summary = score(&attempt).unwrap();
    assert_eq!(summary.correct, 4);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.percentage, 80);
    assert_eq!(summary.incorrect(), 1);
}

#[test]
fn unanswered_counts_as_incorrect() {
    let mut attempt = QuizAttempt::new(fixtures::questions(4)).unwrap();
    attempt.answer(1, 1).unwrap();
    let summary = score(&attempt).unwrap();
    assert_eq!(summary.correct, 1);
    assert_eq!(summary.percentage, 25);
}

#[test]
fn percentage_rounds_half_up() {
    // 1/3 = 33.3 -> 33, 2/3 = 66.7 -> 67, 1/8 = 12.5 -> 13
    let cases = [(3, 1, 33), (3, 2, 67), (8, 1, 13)];
    for (total, correct, expected) in cases {
        let mut attempt = QuizAttempt::new(fixtures::questions(total)).unwrap();
        for id in 1..=correct {
            attempt.answer(id, 1).unwrap();
        }
        assert_eq!(score(&attempt).unwrap().percentage, expected);
    }
}

#[test]
fn empty_quiz_is_rejected() {
    let attempt = QuizAttempt::new(Vec::new()).unwrap();
    assert!(matches!(score(&attempt), Err(NotesError::InvalidInput(_))));
}

#[test]
fn perfect_and_zero_scores() {
    let mut attempt = QuizAttempt::new(fixtures::questions(3)).unwrap();
    assert_eq!(score(&attempt).unwrap().percentage, 0);
    for id in 1..=3 {
        attempt.answer(id, 1).unwrap();
    }
    assert_eq!(score(&attempt).unwrap().percentage, 100);
}

#[test]
fn review_lists_questions_in_order() {
    let mut attempt = QuizAttempt::new(fixtures::questions(3)).unwrap();
    attempt.answer(1, 1).unwrap();
    attempt.answer(2, 3).unwrap();
    let entries = review(&attempt);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].question_id, 1);
    assert!(entries[0].is_correct);
    assert_eq!(entries[0].user_answer, "Option 1");

    assert!(!entries[1].is_correct);
    assert_eq!(entries[1].user_answer, "Option 3");
    assert_eq!(entries[1].correct_answer, "Option 1");

    assert!(!entries[2].is_correct);
    assert_eq!(entries[2].user_answer, NOT_ANSWERED);
    assert_eq!(entries[2].explanation, "Explanation 3");
}
