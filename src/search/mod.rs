//! Search over the editorial collection
//!
//! - `category`: Raw selector value -> field scope
//! - `filter`: Stable, null-safe substring filter

pub mod category;
pub mod filter;

pub use category::{SearchCategory, STRUCTURE_PREFIX};
pub use filter::{filter_records, matches_record};
