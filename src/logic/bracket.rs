//! Entry point: generate matches for the configured format, then schedule them.

use crate::logic::elimination::{generate_double_elimination, generate_single_elimination};
use crate::logic::pools::generate_pools;
use crate::logic::round_robin::generate_round_robin;
use crate::logic::scheduler::schedule_matches;
use crate::models::{Bracket, BracketType, Team, TournamentSettings};
use chrono::NaiveDate;
use log::info;
use rand::Rng;

/// Generate and schedule a bracket, seeding with the thread-local RNG.
pub fn generate_bracket(teams: &[Team], settings: &TournamentSettings, start_date: NaiveDate) -> Bracket {
    generate_bracket_with_rng(teams, settings, start_date, &mut rand::thread_rng())
}

/// Generate and schedule a bracket using `rng` for seeding (reproducible with a seeded RNG).
///
/// Too few teams for the format gives an empty bracket; callers check `is_empty()`.
/// `pool_assignments` is only set for `BracketType::Pools`.
pub fn generate_bracket_with_rng<R: Rng + ?Sized>(
    teams: &[Team],
    settings: &TournamentSettings,
    start_date: NaiveDate,
    rng: &mut R,
) -> Bracket {
    let (matches, pool_assignments) = match settings.bracket_type {
        BracketType::RoundRobin => (generate_round_robin(teams), None),
        BracketType::SingleElimination => (generate_single_elimination(teams, rng), None),
        BracketType::DoubleElimination => (generate_double_elimination(teams, rng), None),
        BracketType::Pools => {
            let pool_play = generate_pools(
                teams,
                settings.pool_count_or_default(),
                settings.pool_size_or_default(),
                rng,
            );
            (pool_play.matches, Some(pool_play.assignments))
        }
    };

    let matches = schedule_matches(matches, settings, start_date);
    info!(
        "Generated {:?} bracket: {} teams, {} matches starting {}",
        settings.bracket_type,
        teams.len(),
        matches.len(),
        start_date
    );

    Bracket {
        matches,
        pool_assignments,
    }
}
