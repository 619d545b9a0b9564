use std::collections::BTreeSet;
use std::fmt::Write as _;

use anyhow::{anyhow, Context, Result};
use notes_common::auth;
use notes_common::catalog;
use notes_common::filter::{filter_and_sort, paginate};
use notes_common::generator::{GeneratorDifficulty, GeneratorFlow, GeneratorStep};
use notes_common::progress::ProgressPlan;
use notes_common::quiz::QuizAttempt;
use notes_common::responses::{canned_summary, ChatScript, SCANNED_TEXT};
use notes_common::scoring::{self, ScoreSummary};
use notes_common::suggestions::{SearchHistory, SuggestionPanel};
use notes_common::types::{ContentItem, FilterState, ProgressSettings, SortKey};

use crate::ramp;

/// Filter arguments shared by the `notes` and `quizzes` commands.
#[derive(Clone, Debug, Default)]
pub struct FilterArgs {
    pub query: String,
    pub categories: Vec<String>,
    pub secondary: Vec<String>,
    pub min_rating: f64,
    pub sort: SortKey,
}

impl FilterArgs {
    pub fn to_state(&self) -> FilterState {
        FilterState {
            query: self.query.clone(),
            selected_categories: self.categories.iter().cloned().collect::<BTreeSet<_>>(),
            selected_secondary: self.secondary.iter().cloned().collect::<BTreeSet<_>>(),
            min_score: self.min_rating,
            sort: self.sort,
        }
    }
}

pub fn list_notes(args: &FilterArgs, page: usize, settings: &ProgressSettings) -> Result<String> {
    let notes = catalog::sample_notes()?;
    let results = filter_and_sort(&notes, &args.to_state())?;
    let page = paginate(&results, page, settings.page_size)?;
    let mut out = String::new();
    writeln!(
        out,
        "{} note(s) found, page {} of {}",
        page.total_items,
        page.page,
        page.total_pages.max(1)
    )?;
    for note in &page.items {
        write_item(&mut out, note, "downloads")?;
    }
    Ok(out)
}

pub fn list_quizzes(args: &FilterArgs) -> Result<String> {
    let quizzes = catalog::sample_quizzes()?;
    let results = filter_and_sort(&quizzes, &args.to_state())?;
    let mut out = String::new();
    writeln!(out, "{} quiz(zes) found", results.len())?;
    for quiz in &results {
        write_item(&mut out, quiz, "attempts")?;
    }
    Ok(out)
}

fn write_item(out: &mut String, item: &ContentItem, popularity: &str) -> Result<()> {
    writeln!(
        out,
        "  #{:<3} {}  [{} / {}]  \u{2605}{:.1}  {} {}",
        item.id,
        item.title,
        item.category,
        item.secondary_category,
        item.score,
        item.popularity,
        popularity
    )?;
    Ok(())
}

/// Parse "1,0,-,2": option indexes per question, `-` leaves it blank.
pub fn parse_answers(raw: &str) -> Result<Vec<Option<usize>>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s == "-" {
                Ok(None)
            } else {
                s.parse::<usize>()
                    .map(Some)
                    .with_context(|| format!("answer '{}' is not an option number", s))
            }
        })
        .collect()
}

fn answer_all(attempt: &mut QuizAttempt, answers: &[Option<usize>]) -> Result<()> {
    let ids: Vec<u32> = attempt.questions().iter().map(|q| q.id).collect();
    if answers.len() > ids.len() {
        return Err(anyhow!(
            "{} answers given for {} questions",
            answers.len(),
            ids.len()
        ));
    }
    for (id, answer) in ids.iter().zip(answers) {
        if let Some(option) = answer {
            attempt.answer(*id, *option)?;
        }
    }
    attempt.submit();
    Ok(())
}

/// Score and review as printed after a quiz.
pub fn report(attempt: &QuizAttempt) -> Result<(ScoreSummary, String)> {
    let summary = scoring::score(attempt)?;
    let mut out = String::new();
    writeln!(
        out,
        "Score: {}% ({} correct, {} incorrect, {} total)",
        summary.percentage,
        summary.correct,
        summary.incorrect(),
        summary.total
    )?;
    for (n, entry) in scoring::review(attempt).iter().enumerate() {
        let mark = if entry.is_correct { "\u{2713}" } else { "\u{2717}" };
        writeln!(out, "{} {}. {}", mark, n + 1, entry.prompt)?;
        writeln!(out, "    your answer: {}", entry.user_answer)?;
        if !entry.is_correct {
            writeln!(out, "    correct answer: {}", entry.correct_answer)?;
        }
    }
    Ok((summary, out))
}

pub fn take_quiz(id: u32, answers: &str) -> Result<String> {
    let quiz = catalog::find_quiz(id)?;
    let mut attempt = QuizAttempt::new(quiz.questions)?;
    answer_all(&mut attempt, &parse_answers(answers)?)?;
    let (_, text) = report(&attempt)?;
    Ok(format!("{}\n{}", quiz.title, text))
}

pub fn show_quiz(id: u32) -> Result<String> {
    let quiz = catalog::find_quiz(id)?;
    let mut out = String::new();
    writeln!(
        out,
        "{} ({}, {} min, {} questions)",
        quiz.title,
        quiz.difficulty.as_str(),
        quiz.time_limit_minutes,
        quiz.questions.len()
    )?;
    for (n, q) in quiz.questions.iter().enumerate() {
        writeln!(out, "{}. {}", n + 1, q.prompt)?;
        for (i, option) in q.options.iter().enumerate() {
            writeln!(out, "    {}) {}", i, option)?;
        }
    }
    Ok(out)
}

pub fn summarize(note_id: u32, settings: &ProgressSettings, realtime: bool) -> Result<String> {
    let notes = catalog::sample_notes()?;
    let note = notes
        .iter()
        .find(|n| n.id == note_id)
        .ok_or_else(|| anyhow!("no note with id {}", note_id))?;
    let plan = ProgressPlan::from_millis(settings.summarize_ms, settings.step)?;
    let summary = ramp::run("Analyzing", plan, canned_summary(), realtime)?;
    let mut out = String::new();
    writeln!(out, "{}\n\n{}\n\nKey points:", note.title, summary.text)?;
    for point in &summary.key_points {
        writeln!(out, "  - {}", point)?;
    }
    Ok(out)
}

pub fn scan(settings: &ProgressSettings, realtime: bool) -> Result<String> {
    let plan = ProgressPlan::from_millis(settings.scan_ms, settings.step)?;
    ramp::run("Scanning", plan, SCANNED_TEXT.to_string(), realtime)
}

pub fn generate(
    topic: &str,
    difficulty: GeneratorDifficulty,
    count: u32,
    answers: Option<&str>,
    settings: &ProgressSettings,
    realtime: bool,
) -> Result<String> {
    let mut flow = GeneratorFlow::default();
    flow.request.topic = topic.to_string();
    flow.request.difficulty = difficulty;
    flow.request.question_count = count;
    flow.begin()?;

    let plan = ProgressPlan::from_millis(settings.generate_ms, settings.step)?;
    let questions = ramp::run("Generating", plan, catalog::generated_questions()?, realtime)?;
    flow.finish_generation(questions)?;

    let Some(raw) = answers else {
        let mut out = String::new();
        for (n, q) in flow.attempt().map(|a| a.questions()).unwrap_or_default().iter().enumerate() {
            writeln!(out, "{}. {}", n + 1, q.prompt)?;
            for (i, option) in q.options.iter().enumerate() {
                writeln!(out, "    {}) {}", i, option)?;
            }
        }
        return Ok(out);
    };

    let parsed = parse_answers(raw)?;
    let attempt = flow
        .attempt_mut()
        .ok_or_else(|| anyhow!("generator produced no quiz"))?;
    answer_all(attempt, &parsed)?;
    while flow.step() == GeneratorStep::Quiz {
        flow.next_question();
    }
    let attempt = flow
        .attempt()
        .ok_or_else(|| anyhow!("generator produced no quiz"))?;
    Ok(report(attempt)?.1)
}

pub fn suggest(query: &str) -> String {
    match SearchHistory::default().panel_for(query) {
        SuggestionPanel::Suggestions(items) => items.join("\n"),
        SuggestionPanel::Browse { trending, recent } => format!(
            "Trending:\n  {}\nRecent:\n  {}",
            trending.join("\n  "),
            recent.join("\n  ")
        ),
    }
}

pub fn chat(message: &str) -> Option<String> {
    ChatScript::default().reply_to(message).map(str::to_string)
}

pub fn login(username: &str, password: &str, now: u64) -> Result<String> {
    let session = auth::authorize(username, password, now)?;
    Ok(format!(
        "Signed in as {} <{}>\ntoken: {}",
        session.user.name, session.user.email, session.token
    ))
}
