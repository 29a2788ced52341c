//! Query Handler
//!
//! Trigger plumbing between the host and the pipeline: read the query and
//! category, reject an empty query, then filter and render.
//!
//! Only an explicit confirm (button or Enter key) runs a search. Changing the
//! category alone does not refresh results.

use thiserror::Error;

use crate::data::EditorialCollection;
use crate::render::{render, RenderOutcome};
use crate::search::{filter_records, SearchCategory};

/// Key that confirms a search from the query input
pub const CONFIRM_KEY: &str = "Enter";

/// User-facing search errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Confirmed with an empty (or whitespace-only) query
    #[error("검색어를 입력해주세요.")]
    EmptyQuery,
}

/// Events a host can forward to the handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Search button activated
    ConfirmButton,
    /// Key pressed in the query input (`KeyboardEvent.key` style name)
    KeyPress(String),
    /// Category selector changed
    CategoryChanged,
}

impl Trigger {
    /// Whether this trigger runs a search
    pub fn confirms(&self) -> bool {
        match self {
            Trigger::ConfirmButton => true,
            Trigger::KeyPress(key) => key == CONFIRM_KEY,
            Trigger::CategoryChanged => false,
        }
    }
}

/// Runs searches against one loaded collection
#[derive(Debug, Clone, Copy)]
pub struct QueryHandler<'a> {
    collection: &'a EditorialCollection,
}

impl<'a> QueryHandler<'a> {
    pub fn new(collection: &'a EditorialCollection) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &'a EditorialCollection {
        self.collection
    }

    /// Search with the current input values.
    ///
    /// The query is trimmed first; an empty query is rejected before any
    /// filtering happens.
    pub fn handle_search(&self, raw_query: &str, raw_category: &str) -> Result<RenderOutcome, SearchError> {
        let query = raw_query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let category = SearchCategory::parse(raw_category);
        if !category.is_recognized() {
            tracing::warn!("Unrecognized search category '{}', no records will match", raw_category);
        }

        let results = filter_records(query, &category, self.collection.records());
        Ok(render(&results))
    }

    /// Dispatch a host event. Returns `Ok(None)` for triggers that do not
    /// search.
    pub fn handle_trigger(
        &self,
        trigger: &Trigger,
        raw_query: &str,
        raw_category: &str,
    ) -> Result<Option<RenderOutcome>, SearchError> {
        if !trigger.confirms() {
            return Ok(None);
        }
        self.handle_search(raw_query, raw_category).map(Some)
    }
}
