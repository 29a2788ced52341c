//! View Models for rendered search results
//!
//! Structured, display-ready data produced by `render()`. Hosts materialize
//! these into whatever UI they have (HTML, terminal, JSON).

use serde::Serialize;
use smallvec::SmallVec;

/// Seconds of animation delay added per card position
pub const STAGGER_STEP_SECS: f64 = 0.1;

/// Outcome of rendering a result set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderOutcome {
    /// No matches: show the empty-state indicator, hide list and count
    Empty,
    /// Show the result list and a count equal to `cards.len()`
    Populated { count: usize, cards: Vec<CardView> },
}

impl RenderOutcome {
    pub fn count(&self) -> usize {
        match self {
            RenderOutcome::Empty => 0,
            RenderOutcome::Populated { count, .. } => *count,
        }
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            RenderOutcome::Empty => &[],
            RenderOutcome::Populated { cards, .. } => cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RenderOutcome::Empty)
    }

    pub fn shows_empty_state(&self) -> bool {
        self.is_empty()
    }

    /// Result list and result count are shown or hidden together
    pub fn shows_results(&self) -> bool {
        !self.is_empty()
    }
}

/// One result card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub title: String,
    pub author: String,
    pub date: String,
    /// Staggered entry animation, `index * 0.1` seconds
    pub animation_delay_secs: f64,
    /// One block per structure section, in stored order
    pub blocks: SmallVec<[StructureBlockView; 4]>,
}

impl CardView {
    /// Delay as a CSS time value, e.g. `0s`, `0.1s`
    pub fn animation_delay_css(&self) -> String {
        format!("{}s", self.animation_delay_secs)
    }
}

/// One labeled structure section inside a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureBlockView {
    /// Raw section key as stored on the record
    pub key: String,
    pub label: String,
    pub css_class: String,
    pub text: String,
}

/// Animation delay for the card at `index`
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_STEP_SECS
}
