mod fixtures;

use proptest::prelude::*;
use notes_common::filter::{filter_and_sort, paginate};
use notes_common::normalization;
use notes_common::types::{ContentItem, FilterState, SortKey};

const CATEGORIES: &[&str] = &["Computer Science", "Biotechnology", "Commerce"];
const SECONDARY: &[&str] = &["IIT Roorkee", "Punjab Technical University"];

fn item_strategy() -> impl Strategy<Value = ContentItem> {
    (
        1u32..1000,
        "[a-zA-Z ]{0,30}",
        0usize..CATEGORIES.len(),
        0usize..SECONDARY.len(),
        0u32..=50,
        0u64..5000,
    )
        .prop_map(|(id, title, c, s, score, popularity)| {
            fixtures::note(
                id,
                &title,
                CATEGORIES[c],
                SECONDARY[s],
                score as f64 / 10.0,
                popularity,
            )
        })
}

fn sort_strategy() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

proptest! {
    #[test]
    fn default_filter_is_identity(items in prop::collection::vec(item_strategy(), 0..20)) {
        let result = filter_and_sort(&items, &FilterState::default()).unwrap();
        prop_assert_eq!(result, items);
    }

    #[test]
    fn result_is_subset_satisfying_min_score(
        items in prop::collection::vec(item_strategy(), 0..20),
        min in 0u32..=50,
    ) {
        let state = FilterState { min_score: min as f64 / 10.0, ..FilterState::default() };
        let result = filter_and_sort(&items, &state).unwrap();
        prop_assert!(result.len() <= items.len());
        for r in &result {
            prop_assert!(r.score >= state.min_score);
            prop_assert!(items.contains(r));
        }
    }

    #[test]
    fn raising_min_score_never_grows_result(
        items in prop::collection::vec(item_strategy(), 0..20),
        low in 0u32..=50,
        delta in 0u32..=50,
    ) {
        let loose = FilterState { min_score: low as f64 / 10.0, ..FilterState::default() };
        let strict = FilterState { min_score: (low + delta) as f64 / 10.0, ..FilterState::default() };
        let a = filter_and_sort(&items, &loose).unwrap();
        let b = filter_and_sort(&items, &strict).unwrap();
        prop_assert!(b.len() <= a.len());
    }

    #[test]
    fn filtering_is_idempotent(
        items in prop::collection::vec(item_strategy(), 0..20),
        query in "[a-z]{0,3}",
        sort in sort_strategy(),
    ) {
        let state = FilterState { query, sort, ..FilterState::default() };
        let once = filter_and_sort(&items, &state).unwrap();
        let twice = filter_and_sort(&once, &state).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_stable_for_equal_scores(
        popularity in prop::collection::vec(0u64..5, 0..20),
    ) {
        let items: Vec<ContentItem> = popularity
            .iter()
            .enumerate()
            .map(|(i, p)| fixtures::note(i as u32, "t", "c", "s", 3.0, *p))
            .collect();
        let state = FilterState { sort: SortKey::Popularity, ..FilterState::default() };
        let result = filter_and_sort(&items, &state).unwrap();
        for pair in result.windows(2) {
            prop_assert!(pair[0].popularity >= pair[1].popularity);
            if pair[0].popularity == pair[1].popularity {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn pages_cover_every_item_once(
        items in prop::collection::vec(item_strategy(), 0..30),
        per_page in 1usize..8,
    ) {
        let first = paginate(&items, 1, per_page).unwrap();
        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            seen.extend(paginate(&items, page, per_page).unwrap().items);
        }
        prop_assert_eq!(seen, items);
    }

    #[test]
    fn normalize_is_idempotent(s in ".*") {
        let once = normalization::normalize_text(&s);
        let twice = normalization::normalize_text(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn canonical_tag_length(s in ".{0,200}") {
        let result = normalization::canonical_tag(&s);
        prop_assert!(result.chars().count() <= 32);
    }
}
