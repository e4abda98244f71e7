//! # Team Filter
//!
//! Free-text filtering over the loaded team list. A team matches when its
//! name, league, or stadium location contains the query, ignoring case and
//! surrounding whitespace. The result is always an order-preserving
//! subsequence of the input, so filtering is idempotent and an empty query
//! is the identity.

use crate::api::Team;

/// Trim and case-fold a raw query.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// True if `team` matches an already-normalized query.
pub fn matches(team: &Team, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |field: &str| field.to_lowercase().contains(needle);
    hit(team.name.as_str())
        || team.league.as_deref().is_some_and(hit)
        || team.stadium_location.as_deref().is_some_and(hit)
}

/// Indices into `teams` that match `text`, in original order.
pub fn matching_indices(teams: &[Team], text: &str) -> Vec<usize> {
    let needle = normalize(text);
    teams
        .iter()
        .enumerate()
        .filter(|(_, team)| matches(team, &needle))
        .map(|(i, _)| i)
        .collect()
}
