//! Conflict detection for manual rescheduling.

use crate::models::GameMatch;

/// Existing matches that conflict with `candidate`.
///
/// A conflict needs a shared team and overlapping half-open windows
/// `[start, start + duration_minutes)`. Unscheduled matches never conflict.
pub fn detect_conflicts<'a>(
    existing: &'a [GameMatch],
    candidate: &GameMatch,
    duration_minutes: u32,
) -> Vec<&'a GameMatch> {
    let Some((new_start, new_end)) = candidate.time_window(duration_minutes) else {
        return Vec::new();
    };
    existing
        .iter()
        .filter(|m| m.shares_team_with(candidate))
        .filter(|m| match m.time_window(duration_minutes) {
            Some((start, end)) => start < new_end && new_start < end,
            None => false,
        })
        .collect()
}
