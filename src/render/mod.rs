//! Rendering of search results
//!
//! - `view_models`: `RenderOutcome`, `CardView`, `StructureBlockView`
//! - `labels`: Structure key -> label / style class lookup table
//! - `view_builder`: `render()` and the scroll-to-results rule
//! - `formatters`: HTML, Markdown, JSON and plain-text output

pub mod formatters;
pub mod labels;
pub mod view_builder;
pub mod view_models;

pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter, TextFormatter};
pub use view_builder::{render, ScrollPolicy, SCROLL_DEFER};
pub use view_models::{CardView, RenderOutcome, StructureBlockView};
