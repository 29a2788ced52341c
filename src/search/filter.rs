//! Record filter
//!
//! Case-insensitive substring matching (not tokenized, not fuzzy) scoped by
//! `SearchCategory`. Missing fields are simply non-matches.
//!
//! An empty query returns nothing for every category. Showing nothing until
//! the user types is the intended behavior, not a fallback.

use crate::data::EditorialRecord;
use crate::search::category::SearchCategory;

/// Filter `records` down to those matching `query` under `category`.
///
/// Stable: the result keeps the source order. Records are borrowed, never
/// cloned or mutated.
///
/// # Examples
/// ```
/// use editorial_search::{filter_records, EditorialCollection, SearchCategory};
///
/// let collection = EditorialCollection::from_json_str(
///     r#"[{"title": "A", "author": "Kim"}, {"title": "B", "author": "Lee"}]"#,
/// ).unwrap();
///
/// let hits = filter_records("kim", &SearchCategory::Author, collection.records());
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].title(), Some("A"));
/// ```
pub fn filter_records<'a>(
    query: &str,
    category: &SearchCategory,
    records: &'a [EditorialRecord],
) -> Vec<&'a EditorialRecord> {
    if query.is_empty() {
        return vec![];
    }

    let query_lower = query.to_lowercase();

    let results: Vec<&EditorialRecord> = records
        .iter()
        .filter(|record| matches_record(record, &query_lower, category))
        .collect();

    tracing::debug!(
        "Filter '{}' on {}: {} of {} records",
        query,
        category,
        results.len(),
        records.len()
    );

    results
}

/// Whether one record matches an already-lowercased query
pub fn matches_record(record: &EditorialRecord, query_lower: &str, category: &SearchCategory) -> bool {
    match category {
        SearchCategory::All => {
            contains_ci(record.title(), query_lower)
                || contains_ci(record.author(), query_lower)
                || record.section_texts().any(|text| contains_ci(Some(text), query_lower))
        }
        SearchCategory::Author => contains_ci(record.author(), query_lower),
        SearchCategory::Title => contains_ci(record.title(), query_lower),
        SearchCategory::Structure(key) => contains_ci(record.section(key), query_lower),
        SearchCategory::Unrecognized(_) => false,
    }
}

/// Null-safe containment: a missing field never matches
fn contains_ci(value: Option<&str>, query_lower: &str) -> bool {
    match value {
        Some(v) if !v.is_empty() => v.to_lowercase().contains(query_lower),
        _ => false,
    }
}
