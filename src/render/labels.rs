//! Structure Section Label Lookup Table
//!
//! Maps structure section keys to their display label and label style class.
//! Keys outside the table are not dropped: the raw key is its own label and
//! the block gets the background style.

/// A known structure section with its display label and CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLabel {
    pub key: &'static str,
    pub label: &'static str,
    pub css_class: &'static str,
}

/// Style class for keys outside the table
pub const FALLBACK_CSS_CLASS: &str = "bg-label";

// ============================================================================
// EMBEDDED LABEL TABLE
// ============================================================================

static SECTION_LABELS: &[SectionLabel] = &[
    SectionLabel { key: "background", label: "배경", css_class: "bg-label" },
    SectionLabel { key: "evidence", label: "근거", css_class: "ev-label" },
    SectionLabel { key: "argument", label: "주장", css_class: "arg-label" },
    SectionLabel { key: "fact", label: "사실", css_class: "fact-label" },
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Table entry for a key, `None` for keys outside the table
pub fn lookup(key: &str) -> Option<&'static SectionLabel> {
    SECTION_LABELS.iter().find(|entry| entry.key == key)
}

/// Display label for a structure key.
///
/// # Examples
/// ```
/// use editorial_search::render::labels::section_label;
///
/// assert_eq!(section_label("evidence"), "근거");
/// assert_eq!(section_label("counterpoint"), "counterpoint");
/// ```
pub fn section_label(key: &str) -> &str {
    match lookup(key) {
        Some(entry) => entry.label,
        None => key,
    }
}

/// Label CSS class for a structure key
pub fn section_css_class(key: &str) -> &'static str {
    lookup(key).map_or(FALLBACK_CSS_CLASS, |entry| entry.css_class)
}
