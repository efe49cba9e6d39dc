//! Shared wire types for the string analysis service: the persisted record,
//! its computed properties, and the typed filter vocabulary used by queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod error;
mod filters;

pub use error::{FilterError, Result};
pub use filters::{parse_filters, FilterCriteria, WordCountFilter};

/// The closed set of properties derived from an input string.
///
/// The shape is fixed at compile time so the evaluator never does runtime key
/// lookup; `character_frequency` is the only open-ended part.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StringProperties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency: HashMap<char, usize>,
}

/// The persisted unit: an input string plus its derived properties, keyed by
/// content identity (`id == sha256 of value`).
///
/// Records are immutable once created; there is no update operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRecord {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}
