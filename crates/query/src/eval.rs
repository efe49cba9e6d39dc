use stringstat_protocol::{AnalysisRecord, FilterCriteria, WordCountFilter};

/// True iff the record satisfies every criterion present (AND semantics).
/// An empty criteria set matches everything.
#[must_use]
pub fn matches(criteria: &FilterCriteria, record: &AnalysisRecord) -> bool {
    if let Some(expected) = criteria.is_palindrome {
        if record.properties.is_palindrome != expected {
            return false;
        }
    }

    // A range where min > max is valid; it simply matches nothing.
    let length = record.properties.length as i64;
    if criteria.min_length.is_some_and(|min| length < min) {
        return false;
    }
    if criteria.max_length.is_some_and(|max| length > max) {
        return false;
    }

    if let Some(filter) = criteria.word_count {
        let words = record.properties.word_count as i64;
        let ok = match filter {
            WordCountFilter::Exactly(n) => words == n,
            WordCountFilter::Multiple => words >= 2,
        };
        if !ok {
            return false;
        }
    }

    // Containment is checked against the original value, not the
    // character_frequency map.
    if let Some(c) = criteria.contains_character {
        if !record.value.contains(c) {
            return false;
        }
    }

    true
}

/// Batch form: the matching subset, preserving the input (store-native)
/// ordering.
pub fn filter_records<'a, I>(criteria: &FilterCriteria, records: I) -> Vec<&'a AnalysisRecord>
where
    I: IntoIterator<Item = &'a AnalysisRecord>,
{
    records
        .into_iter()
        .filter(|record| matches(criteria, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stringstat_analyzer::new_record;

    fn length_range(min: i64, max: i64) -> FilterCriteria {
        FilterCriteria {
            min_length: Some(min),
            max_length: Some(max),
            ..FilterCriteria::default()
        }
    }

    #[test]
    fn empty_criteria_match_every_record() {
        let record = new_record("anything at all");
        assert!(matches(&FilterCriteria::default(), &record));
    }

    #[test]
    fn palindrome_criterion_compares_equality() {
        let criteria = FilterCriteria {
            is_palindrome: Some(true),
            ..FilterCriteria::default()
        };
        assert!(matches(&criteria, &new_record("racecar")));
        assert!(!matches(&criteria, &new_record("hello")));
    }

    #[test]
    fn point_range_matches_exact_length_only() {
        let criteria = length_range(5, 5);
        assert!(matches(&criteria, &new_record("12345")));
        assert!(!matches(&criteria, &new_record("1234")));
        assert!(!matches(&criteria, &new_record("123456")));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let criteria = length_range(10, 1);
        for value in ["", "short", "a considerably longer value"] {
            assert!(!matches(&criteria, &new_record(value)));
        }
    }

    #[test]
    fn word_count_is_exact_equality() {
        let criteria = FilterCriteria {
            word_count: Some(WordCountFilter::Exactly(2)),
            ..FilterCriteria::default()
        };
        assert!(matches(&criteria, &new_record("two words")));
        assert!(!matches(&criteria, &new_record("one")));
        assert!(!matches(&criteria, &new_record("three whole words")));
    }

    #[test]
    fn multiple_sentinel_means_more_than_one_word() {
        let criteria = FilterCriteria {
            word_count: Some(WordCountFilter::Multiple),
            ..FilterCriteria::default()
        };
        assert!(matches(&criteria, &new_record("two words")));
        assert!(matches(&criteria, &new_record("three whole words")));
        assert!(!matches(&criteria, &new_record("single")));
        assert!(!matches(&criteria, &new_record("")));
    }

    #[test]
    fn containment_checks_the_original_value_case_sensitively() {
        let criteria = FilterCriteria {
            contains_character: Some('A'),
            ..FilterCriteria::default()
        };
        assert!(matches(&criteria, &new_record("Abc")));
        assert!(!matches(&criteria, &new_record("abc")));
    }

    #[test]
    fn criteria_combine_with_and_semantics() {
        let criteria = FilterCriteria {
            is_palindrome: Some(true),
            min_length: Some(5),
            ..FilterCriteria::default()
        };
        assert!(matches(&criteria, &new_record("racecar")));
        // Palindrome but too short.
        assert!(!matches(&criteria, &new_record("abba")));
        // Long enough but not a palindrome.
        assert!(!matches(&criteria, &new_record("not a palindrome")));
    }

    #[test]
    fn batch_form_preserves_input_ordering() {
        let records = vec![
            new_record("abba"),
            new_record("hello"),
            new_record("racecar"),
        ];
        let criteria = FilterCriteria {
            is_palindrome: Some(true),
            ..FilterCriteria::default()
        };

        let matched = filter_records(&criteria, &records);
        let values: Vec<&str> = matched.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["abba", "racecar"]);
    }
}
