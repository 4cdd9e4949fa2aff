//! The filter pipeline: pure predicates over the grant store.
//!
//! Given the full grant list, a search term, and the filter criteria, the
//! pipeline produces the subset of grants satisfying every clause
//! conjunctively. It has no error path: malformed numeric or date input
//! imposes no constraint, and an empty result is a normal outcome.

use chrono::NaiveDate;

use crate::types::{FilterCriteria, Grant};

/// Case-insensitive substring match against name, organization, description,
/// and grant number. An empty term matches everything.
pub fn matches_search(grant: &Grant, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    grant.name.to_lowercase().contains(&needle)
        || grant.organization.to_lowercase().contains(&needle)
        || grant.description.to_lowercase().contains(&needle)
        || grant.number.to_lowercase().contains(&needle)
}

/// Parse a user-supplied amount bound. Accepts an optional leading `$` and
/// well-placed grouping commas ("$60,000"); anything else, including
/// misplaced separators or interior whitespace, is treated as absent so
/// garbled input imposes no constraint instead of a surprising one.
pub fn parse_amount(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }

    if !trimmed.contains(',') {
        return trimmed.parse().ok();
    }

    // Grouped form: 1-3 leading digits, then comma-separated groups of 3
    let mut groups = trimmed.split(',');
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 || !first.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut digits = String::from(first);
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    digits.parse().ok()
}

/// Parse a user-supplied deadline floor in `YYYY-MM-DD`. Unparseable input is
/// treated as absent.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// True when the grant satisfies every filter clause.
pub fn matches_criteria(grant: &Grant, criteria: &FilterCriteria) -> bool {
    if !criteria.sector_passes_all() && !grant.has_sector(&criteria.sector) {
        return false;
    }
    if !criteria.status.matches(grant.status) {
        return false;
    }
    if let Some(min) = parse_amount(&criteria.min_amount) {
        if grant.amount < min {
            return false;
        }
    }
    if let Some(max) = parse_amount(&criteria.max_amount) {
        if grant.amount > max {
            return false;
        }
    }
    if let Some(floor) = parse_date(&criteria.min_deadline) {
        if grant.deadline < floor {
            return false;
        }
    }
    true
}

/// Run the full pipeline, returning indices into `grants` in store order.
pub fn filter_grants(grants: &[Grant], term: &str, criteria: &FilterCriteria) -> Vec<usize> {
    grants
        .iter()
        .enumerate()
        .filter(|(_, grant)| matches_search(grant, term) && matches_criteria(grant, criteria))
        .map(|(idx, _)| idx)
        .collect()
}
