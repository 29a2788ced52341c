//! Editorial Search
//!
//! Category-scoped search over a fixed collection of editorials, with the
//! matches turned into card view models.
//!
//! The pipeline is linear:
//! - `data/`: Loading the immutable editorial collection (JSON)
//! - `search/`: Category parsing and the null-safe substring filter
//! - `render/`: Card view models, label lookup table and output formatters
//! - `handler`: Trigger plumbing (trim, reject empty query, filter, render)
//! - `config`: Environment-driven settings for the CLI host

pub mod config;
pub mod data;
pub mod handler;
pub mod render;
pub mod search;

// Re-export commonly used types
pub use config::{OutputFormat, SearchConfig};
pub use data::{EditorialCollection, EditorialRecord};
pub use handler::{QueryHandler, SearchError, Trigger};
pub use render::{render, CardView, RenderOutcome, ScrollPolicy, StructureBlockView};
pub use search::{filter_records, SearchCategory};
