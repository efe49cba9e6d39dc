use crate::error::{QueryError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use stringstat_protocol::{FilterCriteria, WordCountFilter};

/// The outcome of a successful translation: the derived criteria plus the
/// original text, so callers can surface how the query was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub original: String,
    pub criteria: FilterCriteria,
}

/// Negation markers are detected anywhere in the text, not scoped to the
/// palindrome clause, so "not a short string but a palindrome" flips the
/// flag too.
const NEGATION_MARKERS: &[&str] = &["not", "isn't", "is not"];

// Word-count phrasing, checked in priority order; the first set with a match
// wins.
const ONE_WORD: &[&str] = &["single word", "one word", "1 word"];
const TWO_WORDS: &[&str] = &["two words", "2 words"];
const THREE_WORDS: &[&str] = &["three words", "3 words"];
const MULTIPLE_WORDS: &[&str] = &["multiple words"];

static LONGER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"longer than (\d+)").expect("valid regex"));
static SHORTER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"shorter than (\d+)").expect("valid regex"));
static CONTAINS_EXPLICIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:contains|includes|containing) (?:letter|character) (\w)")
        .expect("valid regex")
});
static CONTAINS_LOOSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"contain(?:s|ing)? (?:the )?(?:letter |character )?([a-z])")
        .expect("valid regex")
});

/// Maps a free-text query onto a [`FilterCriteria`] using a fixed, ordered
/// rule set. Fails with [`QueryError::Unparseable`] when no rule fires, which
/// keeps "nothing matched" distinct from a legitimately empty criteria set.
pub fn translate(text: &str) -> Result<Translation> {
    let lowered = text.to_lowercase();
    let mut criteria = FilterCriteria::default();

    if lowered.contains("palindrome") || lowered.contains("palindromic") {
        let negated = NEGATION_MARKERS.iter().any(|m| lowered.contains(m));
        criteria.is_palindrome = Some(!negated);
    }

    criteria.word_count = word_count_phrase(&lowered);

    if let Some(n) = captured_number(&LONGER_THAN, &lowered) {
        criteria.min_length = Some(n + 1);
    }
    if let Some(n) = captured_number(&SHORTER_THAN, &lowered) {
        criteria.max_length = Some(n - 1);
    }

    criteria.contains_character = CONTAINS_EXPLICIT
        .captures(&lowered)
        .or_else(|| CONTAINS_LOOSE.captures(&lowered))
        .and_then(|caps| caps[1].chars().next());
    // "first vowel" overrides whatever the extraction found.
    if lowered.contains("first vowel") {
        criteria.contains_character = Some('a');
    }

    if criteria.is_empty() {
        return Err(QueryError::Unparseable);
    }

    log::debug!("translated {text:?} -> {criteria:?}");
    Ok(Translation {
        original: text.to_string(),
        criteria,
    })
}

fn word_count_phrase(lowered: &str) -> Option<WordCountFilter> {
    let contains_any = |phrases: &[&str]| phrases.iter().any(|p| lowered.contains(p));

    if contains_any(ONE_WORD) {
        Some(WordCountFilter::Exactly(1))
    } else if contains_any(TWO_WORDS) {
        Some(WordCountFilter::Exactly(2))
    } else if contains_any(THREE_WORDS) {
        Some(WordCountFilter::Exactly(3))
    } else if contains_any(MULTIPLE_WORDS) {
        Some(WordCountFilter::Multiple)
    } else {
        None
    }
}

fn captured_number(pattern: &Regex, lowered: &str) -> Option<i64> {
    pattern
        .captures(lowered)
        .and_then(|caps| caps[1].parse().ok())
}
