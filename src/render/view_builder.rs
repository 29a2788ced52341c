//! View Builder
//!
//! Turns an ordered result set into a `RenderOutcome`. Pure: the records are
//! only read, and filtering is never re-run here.

use std::time::Duration;

use smallvec::SmallVec;

use crate::data::EditorialRecord;
use crate::render::labels::{section_css_class, section_label};
use crate::render::view_models::{stagger_delay, CardView, RenderOutcome, StructureBlockView};

/// Render matched records into cards.
///
/// Empty input gives `RenderOutcome::Empty`; otherwise one card per record in
/// input order, with `count == results.len()`.
pub fn render(results: &[&EditorialRecord]) -> RenderOutcome {
    if results.is_empty() {
        return RenderOutcome::Empty;
    }

    let cards: Vec<CardView> = results
        .iter()
        .enumerate()
        .map(|(index, record)| build_card(index, record))
        .collect();

    RenderOutcome::Populated {
        count: cards.len(),
        cards,
    }
}

fn build_card(index: usize, record: &EditorialRecord) -> CardView {
    let blocks: SmallVec<[StructureBlockView; 4]> = record
        .structure
        .iter()
        .map(|(key, text)| StructureBlockView {
            key: key.clone(),
            label: section_label(key).to_string(),
            css_class: section_css_class(key).to_string(),
            // Null sections keep their slot with empty text
            text: text.clone().unwrap_or_default(),
        })
        .collect();

    CardView {
        title: record.title().unwrap_or_default().to_string(),
        author: record.author().unwrap_or_default().to_string(),
        date: record.date().unwrap_or_default().to_string(),
        animation_delay_secs: stagger_delay(index),
        blocks,
    }
}

// ============================================================================
// SCROLL POLICY
// ============================================================================

/// Delay before the host checks the scroll position after populating
pub const SCROLL_DEFER: Duration = Duration::from_millis(100);

/// Scroll-to-results rule for hosts with a scrollable page.
///
/// Hosts without scrolling can ignore it; nothing in rendering depends on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPolicy {
    /// Height of the header region above the results
    pub header_height: f64,
}

impl ScrollPolicy {
    pub fn new(header_height: f64) -> Self {
        Self { header_height }
    }

    /// Scroll smoothly to the results when still above half the header
    pub fn should_scroll(&self, scroll_y: f64) -> bool {
        scroll_y < self.header_height / 2.0
    }

    /// Whether the host should scroll after showing `outcome`
    pub fn should_scroll_after(&self, outcome: &RenderOutcome, scroll_y: f64) -> bool {
        outcome.shows_results() && self.should_scroll(scroll_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use indexmap::IndexMap;

    fn record(title: &str, structure: &[(&str, Option<&str>)]) -> EditorialRecord {
        let structure: IndexMap<String, Option<String>> = structure
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect();
        EditorialRecord {
            title: Some(title.to_string()),
            author: Some("Kim".to_string()),
            date: Some("2024.05.01".to_string()),
            structure,
        }
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), RenderOutcome::Empty);
    }

    #[test]
    fn test_render_populated_preserves_order_and_count() {
        let records = vec![record("B", &[]), record("A", &[]), record("C", &[])];
        let refs: Vec<&EditorialRecord> = records.iter().collect();

        let outcome = render(&refs);
        assert_eq!(outcome.count(), 3);
        let titles: Vec<&str> = outcome.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_render_stagger_delays() {
        let records = vec![record("A", &[]), record("B", &[]), record("C", &[])];
        let refs: Vec<&EditorialRecord> = records.iter().collect();

        let outcome = render(&refs);
        let delays: Vec<f64> = outcome.cards().iter().map(|c| c.animation_delay_secs).collect();
        assert_relative_eq!(delays[0], 0.0);
        assert_relative_eq!(delays[1], 0.1);
        assert_relative_eq!(delays[2], 0.2);
    }

    #[test]
    fn test_render_blocks_in_stored_order_with_labels() {
        let records = vec![record(
            "A",
            &[
                ("fact", Some("f")),
                ("background", Some("b")),
                ("rebuttal", Some("r")),
                ("argument", Some("a")),
            ],
        )];
        let refs: Vec<&EditorialRecord> = records.iter().collect();

        let outcome = render(&refs);
        let blocks = &outcome.cards()[0].blocks;

        let labels: Vec<&str> = blocks.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["사실", "배경", "rebuttal", "주장"]);

        let classes: Vec<&str> = blocks.iter().map(|b| b.css_class.as_str()).collect();
        assert_eq!(classes, vec!["fact-label", "bg-label", "bg-label", "arg-label"]);

        assert_eq!(blocks[2].key, "rebuttal");
        assert_eq!(blocks[2].text, "r");
    }

    #[test]
    fn test_render_missing_fields_as_empty_text() {
        let records = vec![EditorialRecord::default(), record("A", &[("evidence", None)])];
        let refs: Vec<&EditorialRecord> = records.iter().collect();

        let outcome = render(&refs);
        let first = &outcome.cards()[0];
        assert_eq!(first.title, "");
        assert!(first.blocks.is_empty());

        let second = &outcome.cards()[1];
        assert_eq!(second.blocks.len(), 1);
        assert_eq!(second.blocks[0].label, "근거");
        assert_eq!(second.blocks[0].text, "");
    }

    #[test]
    fn test_scroll_policy() {
        let policy = ScrollPolicy::new(600.0);
        assert!(policy.should_scroll(0.0));
        assert!(policy.should_scroll(299.0));
        assert!(!policy.should_scroll(300.0));
        assert!(!policy.should_scroll(900.0));

        assert!(!policy.should_scroll_after(&RenderOutcome::Empty, 0.0));
        assert_eq!(SCROLL_DEFER, Duration::from_millis(100));
    }
}
