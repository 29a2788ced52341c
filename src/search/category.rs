//! Search category selector
//!
//! Maps the raw selector value (`all`, `author`, `title`,
//! `structure_<key>`) to the field scope a query is matched against.
//! Parsing never fails: unknown values become `Unrecognized`, which matches
//! nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix of the per-section category values
pub const STRUCTURE_PREFIX: &str = "structure_";

/// Field scope for a search
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum SearchCategory {
    /// Title, author, or any structure section
    #[default]
    All,
    Author,
    Title,
    /// A single structure section by key
    Structure(String),
    /// Any other selector value (matches nothing)
    Unrecognized(String),
}

impl SearchCategory {
    /// Parse a raw selector value. Total: never errors.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "all" => SearchCategory::All,
            "author" => SearchCategory::Author,
            "title" => SearchCategory::Title,
            other => match other.strip_prefix(STRUCTURE_PREFIX) {
                Some(key) => SearchCategory::Structure(key.to_string()),
                None => SearchCategory::Unrecognized(other.to_string()),
            },
        }
    }

    /// Selector value for a structure section key
    pub fn structure_value(key: &str) -> String {
        format!("{}{}", STRUCTURE_PREFIX, key)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, SearchCategory::Unrecognized(_))
    }
}

impl FromStr for SearchCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for SearchCategory {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<SearchCategory> for String {
    fn from(category: SearchCategory) -> Self {
        category.to_string()
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchCategory::All => f.write_str("all"),
            SearchCategory::Author => f.write_str("author"),
            SearchCategory::Title => f.write_str("title"),
            SearchCategory::Structure(key) => write!(f, "{}{}", STRUCTURE_PREFIX, key),
            SearchCategory::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
