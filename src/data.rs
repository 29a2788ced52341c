//! Data Loading and Management
//!
//! Handles loading the editorial collection from JSON. The collection is
//! loaded once before any search runs and is read-only afterwards.
//!
//! Accepted file shapes:
//! - a bare array of records: `[{ "title": ..., ... }, ...]`
//! - a wrapped array: `{ "editorials": [ ... ] }`

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// One searchable editorial.
///
/// Every field is optional: a record with a missing or null field is still a
/// valid record, it simply never matches on that field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditorialRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Opaque display string, never parsed
    #[serde(default)]
    pub date: Option<String>,
    /// Section key -> text, in stored order (drives render order)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub structure: IndexMap<String, Option<String>>,
}

impl EditorialRecord {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Text of one structural section, `None` if the key is absent or null
    pub fn section(&self, key: &str) -> Option<&str> {
        self.structure.get(key).and_then(|v| v.as_deref())
    }

    /// All non-null section texts in stored order
    pub fn section_texts(&self) -> impl Iterator<Item = &str> {
        self.structure.values().filter_map(|v| v.as_deref())
    }
}

/// `"structure": null` deserializes the same as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CollectionFile {
    Bare(Vec<EditorialRecord>),
    Wrapped { editorials: Vec<EditorialRecord> },
}

/// Immutable editorial collection.
///
/// Only shared access is exposed, so the source order seen by the filter is
/// the order the records were loaded in.
#[derive(Debug, Clone, Default)]
pub struct EditorialCollection {
    records: Vec<EditorialRecord>,
}

impl EditorialCollection {
    pub fn new(records: Vec<EditorialRecord>) -> Self {
        Self { records }
    }

    /// Load the collection from a JSON file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read editorial collection: {}", path.display()))?;

        let collection = Self::from_json_str(&raw)
            .with_context(|| format!("Failed to parse editorial collection: {}", path.display()))?;

        tracing::info!(
            "Loaded {} editorials from {}",
            collection.len(),
            path.display()
        );

        Ok(collection)
    }

    /// Parse the collection from a JSON string
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: CollectionFile =
            serde_json::from_str(raw).context("Editorial JSON is neither an array nor { \"editorials\": [...] }")?;

        let records = match file {
            CollectionFile::Bare(records) => records,
            CollectionFile::Wrapped { editorials } => editorials,
        };

        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[EditorialRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct structure keys across the collection, first-seen order.
    ///
    /// Used by hosts to offer one `structure_<key>` category per key.
    pub fn structure_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for record in &self.records {
            for key in record.structure.keys() {
                if !keys.contains(&key.as_str()) {
                    keys.push(key);
                }
            }
        }
        keys
    }
}
