use crate::model::Record;

/// Case-insensitive exact comparison of a stored name against a query.
/// Surrounding whitespace is ignored on both sides; partial matches never count.
pub fn name_matches(candidate: &str, query: &str) -> bool {
    candidate.trim().to_lowercase() == query.trim().to_lowercase()
}

/// Position of the first record whose name matches `query`.
pub fn find_first(records: &[Record], query: &str) -> Option<usize> {
    records.iter().position(|r| name_matches(r.name(), query))
}

/// Number of records whose name matches `query`.
pub fn count_matches(records: &[Record], query: &str) -> usize {
    records.iter().filter(|r| name_matches(r.name(), query)).count()
}
