//! Pure property computation and content identity.
//!
//! Everything here is a total, side-effect-free function over `&str`; the
//! record id is the SHA-256 of the value, which is what makes duplicate
//! detection idempotent.

use chrono::{SubsecRound, Utc};
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};
use stringstat_protocol::{AnalysisRecord, StringProperties};

/// Computes the full property set for an input string.
#[must_use]
pub fn analyze(value: &str) -> StringProperties {
    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: unique_characters(value),
        word_count: word_count(value),
        sha256_hash: sha256_hex(value),
        character_frequency: character_frequency(value),
    }
}

/// Derives the content identity of a value: the lowercase hex SHA-256 digest
/// of its UTF-8 bytes. Always equals `analyze(value).sha256_hash`.
#[must_use]
pub fn identify(value: &str) -> String {
    sha256_hex(value)
}

/// Assembles a complete record for a value, stamped with the current UTC time
/// truncated to whole seconds.
#[must_use]
pub fn new_record(value: &str) -> AnalysisRecord {
    AnalysisRecord {
        id: identify(value),
        value: value.to_string(),
        properties: analyze(value),
        created_at: Utc::now().trunc_subsecs(0),
    }
}

/// Palindrome check over the cleaned string: non-alphanumerics stripped, the
/// remainder lowercased. An empty cleaned string is trivially a palindrome.
fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Distinct characters of the original string, case-sensitive, whitespace and
/// punctuation included.
fn unique_characters(value: &str) -> usize {
    value.chars().collect::<HashSet<_>>().len()
}

/// Non-empty tokens after splitting on runs of whitespace.
fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

fn character_frequency(value: &str) -> HashMap<char, usize> {
    let mut frequency = HashMap::new();
    for c in value.chars() {
        *frequency.entry(c).or_insert(0) += 1;
    }
    frequency
}

fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex_encode_lower(&hasher.finalize())
}

fn hex_encode_lower(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(bytes.len().saturating_mul(2));
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}
