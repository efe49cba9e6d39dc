use crate::error::{FilterError, Result};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A validated, typed criteria set. All present fields combine with AND
/// semantics; an empty set matches every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<WordCountFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterCriteria {
    /// True when no recognized criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }
}

/// Word-count criterion: either an exact count, or the natural-language
/// sentinel "multiple" (more than one word).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCountFilter {
    Exactly(i64),
    Multiple,
}

impl Serialize for WordCountFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Exactly(n) => serializer.serialize_i64(*n),
            Self::Multiple => serializer.serialize_str("multiple"),
        }
    }
}

impl<'de> Deserialize<'de> for WordCountFilter {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Exactly)
                .ok_or_else(|| de::Error::custom("word count out of range")),
            serde_json::Value::String(s) if s == "multiple" => Ok(Self::Multiple),
            _ => Err(de::Error::custom("expected an integer or \"multiple\"")),
        }
    }
}

/// Normalizes raw, weakly-typed query parameters into a [`FilterCriteria`].
///
/// Unrecognized keys are ignored on purpose (forward compatibility); a
/// recognized key with a malformed value fails, never coerces.
pub fn parse_filters(params: &HashMap<String, String>) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::default();

    if let Some(raw) = params.get("is_palindrome") {
        criteria.is_palindrome = Some(parse_bool("is_palindrome", raw)?);
    }
    if let Some(raw) = params.get("min_length") {
        criteria.min_length = Some(parse_int("min_length", raw)?);
    }
    if let Some(raw) = params.get("max_length") {
        criteria.max_length = Some(parse_int("max_length", raw)?);
    }
    if let Some(raw) = params.get("word_count") {
        criteria.word_count = Some(WordCountFilter::Exactly(parse_int("word_count", raw)?));
    }
    if let Some(raw) = params.get("contains_character") {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => criteria.contains_character = Some(c),
            _ => {
                return Err(FilterError::invalid(
                    "contains_character",
                    "must be a single character",
                ))
            }
        }
    }

    Ok(criteria)
}

fn parse_bool(param: &'static str, raw: &str) -> Result<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(FilterError::invalid(param, "must be true or false"))
    }
}

fn parse_int(param: &'static str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| FilterError::invalid(param, "must be an integer"))
}
