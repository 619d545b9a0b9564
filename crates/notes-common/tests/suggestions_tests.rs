use notes_common::suggestions::*;

#[test]
fn short_query_has_no_suggestions() {
    assert!(suggestions_for("").is_empty());
    assert!(suggestions_for("d").is_empty());
}

#[test]
fn suggestions_are_capped_and_contain_query() {
    let result = suggestions_for("DBMS");
    assert_eq!(result.len(), MAX_SUGGESTIONS);
    assert_eq!(result[0], "DBMS notes for B.Tech");
    assert!(result.iter().all(|s| s.contains("DBMS")));
}

#[test]
fn panel_switches_on_query_length() {
    let history = SearchHistory::default();
    match history.panel_for("a") {
        SuggestionPanel::Browse { trending, recent } => {
            assert_eq!(trending.len(), TRENDING_SEARCHES.len());
            assert_eq!(recent.len(), DEFAULT_RECENT_SEARCHES.len());
        }
        other => panic!("expected browse panel, got {:?}", other),
    }
    assert!(matches!(
        history.panel_for("ml"),
        SuggestionPanel::Suggestions(s) if s.len() == MAX_SUGGESTIONS
    ));
}

#[test]
fn history_records_most_recent_first_without_duplicates() {
    let mut history = SearchHistory::default();
    history.record("  machine   learning ");
    history.record("Organic Chemistry");
    assert_eq!(history.recent()[0], "Organic Chemistry");
    assert_eq!(history.recent()[1], "machine learning");
    assert_eq!(
        history
            .recent()
            .iter()
            .filter(|q| q.as_str() == "Organic Chemistry")
            .count(),
        1
    );
    assert!(history.recent().len() <= MAX_SUGGESTIONS);
}

#[test]
fn blank_queries_are_not_recorded() {
    let mut history = SearchHistory::default();
    history.clear();
    history.record("   ");
    assert!(history.recent().is_empty());
}
