//! Parsing of the free-text predecessor field.

use rustc_hash::FxHashSet;

use crate::models::ItemId;

/// Parse a free-text predecessor field into a list of item ids.
///
/// Tokens are separated by any run of commas and/or whitespace. Tokens that
/// do not parse as integers are silently discarded; duplicates are dropped
/// while preserving first-occurrence order. `None`, empty, and blank input
/// all yield an empty list. Never fails.
pub fn parse_predecessors(raw: Option<&str>) -> Vec<ItemId> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let mut seen: FxHashSet<ItemId> = FxHashSet::default();
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<ItemId>().ok())
        .filter(|id| seen.insert(*id))
        .collect()
}
