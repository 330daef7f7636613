//! Round robin pairing: every team plays every other team once.

use crate::models::{GameMatch, Team};

/// Generate all pairs `(i, j)` with `i < j`, in input order.
///
/// Fewer than 2 teams gives an empty list. The result has `n(n-1)/2` matches
/// with time, field and round left unset.
pub fn generate_round_robin(teams: &[Team]) -> Vec<GameMatch> {
    if teams.len() < 2 {
        return Vec::new();
    }
    teams
        .iter()
        .enumerate()
        .flat_map(|(i, a)| teams[i + 1..].iter().map(move |b| GameMatch::new(a.id, b.id)))
        .collect()
}
