use std::fs;

use notenexus_cli::commands::{self, FilterArgs};
use notenexus_cli::config;
use notenexus_cli::ramp;
use notes_common::generator::GeneratorDifficulty;
use notes_common::progress::ProgressPlan;
use notes_common::types::{ProgressSettings, SortKey};

#[test]
fn missing_config_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config::load(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(cfg.progress, ProgressSettings::default());
}

#[test]
fn partial_config_overrides_only_given_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[progress]\nstep = 10\nsummarize_ms = 500\n").unwrap();
    let cfg = config::load(Some(&path)).unwrap();
    assert_eq!(cfg.progress.step, 10);
    assert_eq!(cfg.progress.summarize_ms, 500);
    assert_eq!(cfg.progress.scan_ms, ProgressSettings::default().scan_ms);
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[progress\nstep = ").unwrap();
    assert!(config::load(Some(&path)).is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let cfg = config::Config::default();
    let text = config::to_toml(&cfg).unwrap();
    assert!(text.contains("[progress]"));
    let back: config::Config = toml::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn ramp_delivers_payload_without_sleeping() {
    let plan = ProgressPlan::from_millis(2_000, 5).unwrap();
    let out = ramp::run("Test", plan, 42u32, false).unwrap();
    assert_eq!(out, 42);
}

#[test]
fn notes_listing_filters_and_pages() {
    let args = FilterArgs {
        query: "database".to_string(),
        categories: vec!["Computer Science".to_string()],
        sort: SortKey::Score,
        ..FilterArgs::default()
    };
    let out = commands::list_notes(&args, 1, &ProgressSettings::default()).unwrap();
    assert!(out.starts_with("1 note(s) found"));
    assert!(out.contains("Database Management Systems"));
}

#[test]
fn nan_rating_is_rejected() {
    let args = FilterArgs {
        min_rating: f64::NAN,
        ..FilterArgs::default()
    };
    assert!(commands::list_quizzes(&args).is_err());
}

#[test]
fn answers_parse_with_skips() {
    assert_eq!(
        commands::parse_answers("1, -,2").unwrap(),
        vec![Some(1), None, Some(2)]
    );
    assert!(commands::parse_answers("a").is_err());
}

#[test]
fn take_quiz_reports_score() {
    let quiz = notes_common::catalog::find_quiz(1).unwrap();
    let answers: Vec<String> = quiz
        .questions
        .iter()
        .map(|q| q.correct_option.to_string())
        .collect();
    let out = commands::take_quiz(1, &answers.join(",")).unwrap();
    assert!(out.contains("Score: 100%"));
}

#[test]
fn too_many_answers_is_an_error() {
    assert!(commands::take_quiz(1, "0,0,0,0,0,0,0,0,0,0,0,0").is_err());
}

#[test]
fn generate_and_answer() {
    let settings = ProgressSettings::default();
    let out = commands::generate(
        "SQL",
        GeneratorDifficulty::Easy,
        5,
        Some("1,2,2,1,1"),
        &settings,
        false,
    )
    .unwrap();
    assert!(out.contains("Score: 100%"));
}

#[test]
fn generate_requires_topic() {
    let settings = ProgressSettings::default();
    assert!(commands::generate("  ", GeneratorDifficulty::Medium, 10, None, &settings, false).is_err());
}

#[test]
fn login_and_chat() {
    assert!(commands::login("user", "password", 1).unwrap().contains("Demo User"));
    assert!(commands::login("user", "nope", 1).is_err());
    assert!(commands::chat("help with my exam").unwrap().contains("prepare for exams"));
    assert_eq!(commands::chat(" "), None);
}
