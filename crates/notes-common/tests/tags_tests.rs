use notes_common::tags::*;

#[test]
fn bundled_tables_are_complete() {
    let notes = TagStyles::for_notes().unwrap();
    let quizzes = TagStyles::for_quizzes().unwrap();
    assert_eq!(notes.style_for("Verified"), StyleToken::Blue);
    assert_eq!(notes.style_for("Popular"), StyleToken::Green);
    assert_eq!(quizzes.style_for("Popular"), StyleToken::Purple);
    assert_eq!(quizzes.style_for("Expert").as_class(), "badge-red");
}

#[test]
fn unknown_label_renders_gray() {
    let notes = TagStyles::for_notes().unwrap();
    assert_eq!(notes.style_for("my upload tag"), StyleToken::Gray);
}

#[test]
fn construction_rejects_bad_tables() {
    let known = &["A", "B"];
    assert!(TagStyles::new(known, &[("A", StyleToken::Red)]).is_err());
    assert!(TagStyles::new(known, &[("A", StyleToken::Red), ("C", StyleToken::Blue)]).is_err());
    assert!(TagStyles::new(
        known,
        &[("A", StyleToken::Red), ("A", StyleToken::Red), ("B", StyleToken::Blue)]
    )
    .is_err());
    assert!(TagStyles::new(known, &[("A", StyleToken::Red), ("B", StyleToken::Blue)]).is_ok());
}

#[test]
fn difficulty_badges() {
    assert_eq!(difficulty_style("Beginner"), StyleToken::Green);
    assert_eq!(difficulty_style("Intermediate"), StyleToken::Yellow);
    assert_eq!(difficulty_style("Hard"), StyleToken::Red);
    assert_eq!(difficulty_style("Unknown"), StyleToken::Gray);
}
