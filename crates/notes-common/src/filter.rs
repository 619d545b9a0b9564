use std::collections::HashSet;

use crate::error::{NotesError, Result};
use crate::normalization;
use crate::types::{ContentItem, FilterState, SortKey};

/// Apply every active predicate (AND) and then order by `state.sort`.
///
/// Sorting is stable, so items with equal keys keep their collection order
/// and page contents are reproducible. An empty result is not an error.
pub fn filter_and_sort(items: &[ContentItem], state: &FilterState) -> Result<Vec<ContentItem>> {
    if state.min_score.is_nan() {
        return Err(NotesError::invalid_input("minimum score is NaN"));
    }

    let query = normalization::fold_for_search(&state.query);

    let mut results: Vec<ContentItem> = items
        .iter()
        .filter(|item| matches_query(item, &query))
        .filter(|item| {
            state.selected_categories.is_empty()
                || state.selected_categories.contains(&item.category)
        })
        .filter(|item| {
            state.selected_secondary.is_empty()
                || state.selected_secondary.contains(&item.secondary_category)
        })
        .filter(|item| item.score >= state.min_score)
        .cloned()
        .collect();

    sort_items(&mut results, state.sort);
    Ok(results)
}

/// `query` must already be folded.
fn matches_query(item: &ContentItem, query: &str) -> bool {
    query.is_empty()
        || item
            .searchable_fields()
            .iter()
            .any(|field| normalization::contains_folded(field, query))
}

/// Stable in-place sort by the given key.
pub fn sort_items(items: &mut [ContentItem], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::Score => items.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortKey::Popularity => items.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
        SortKey::Recency => items.sort_by(|a, b| b.recency.cmp(&a.recency)),
        SortKey::Oldest => items.sort_by(|a, b| a.recency.cmp(&b.recency)),
    }
}

/// Distinct categories in first-seen order, for the filter panel.
pub fn distinct_categories(items: &[ContentItem]) -> Vec<String> {
    distinct(items.iter().map(|i| i.category.as_str()))
}

/// Distinct secondary categories (universities, difficulty tiers) in first-seen order.
pub fn distinct_secondary(items: &[ContentItem]) -> Vec<String> {
    distinct(items.iter().map(|i| i.secondary_category.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// One page of a filtered result.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub items: Vec<ContentItem>,
    /// 1-based page number that was requested.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl Page {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}

/// Slice `items` into 1-based pages. Page 0 is treated as page 1; a page
/// past the end comes back empty.
pub fn paginate(items: &[ContentItem], page: usize, per_page: usize) -> Result<Page> {
    if per_page == 0 {
        return Err(NotesError::invalid_input("page size must be at least 1"));
    }
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let start = (page - 1).saturating_mul(per_page);
    let slice = if start >= total_items {
        &[][..]
    } else {
        &items[start..(start + per_page).min(total_items)]
    };
    Ok(Page {
        items: slice.to_vec(),
        page,
        total_pages,
        total_items,
    })
}
