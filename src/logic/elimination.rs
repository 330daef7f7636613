//! Elimination brackets: single and double elimination schedule skeletons.
//!
//! Results are unknown at generation time, so the first team of every pair is
//! treated as the one advancing. The output is a fixed skeleton of rounds and
//! positions, not a results-driven bracket.

use crate::models::{GameMatch, Team};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of winners-bracket rounds for `n` teams: `ceil(log2(n))`, 0 below 2 teams.
pub fn elimination_rounds(n: usize) -> u32 {
    if n < 2 {
        return 0;
    }
    n.next_power_of_two().trailing_zeros()
}

/// Generate a single elimination bracket. Seeds randomly using `rng`.
///
/// 1. Shuffle a copy of the roster.
/// 2. Pair consecutive teams; `round` and `bracket_position` are 1-based.
/// 3. The first team of each pair advances. With an odd count the trailing team
///    gets no match (and no recorded bye) but still advances.
/// 4. Repeat until one team remains.
pub fn generate_single_elimination<R: Rng + ?Sized>(teams: &[Team], rng: &mut R) -> Vec<GameMatch> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut current: Vec<&Team> = teams.iter().collect();
    current.shuffle(rng);

    let mut matches = Vec::new();
    let mut round = 1;
    while current.len() > 1 {
        let round_matches = current
            .chunks_exact(2)
            .zip(1..)
            .map(|(pair, position)| GameMatch::new(pair[0].id, pair[1].id).in_round(round, position));
        matches.extend(round_matches);

        if current.len() % 2 == 1 {
            debug!(
                "Round {}: {} advances without a match (odd team count {})",
                round,
                current[current.len() - 1].name,
                current.len()
            );
        }

        current = current.into_iter().step_by(2).collect();
        round += 1;
    }

    debug!(
        "Single elimination: {} teams, {} rounds, {} matches",
        teams.len(),
        elimination_rounds(teams.len()),
        matches.len()
    );
    matches
}

/// Generate a double elimination bracket. Seeds randomly using `rng`.
///
/// Structural approximation: every winners match below the final winners round
/// gets a losers-bracket twin with the same teams at `round + L` (L = winners
/// rounds), and one grand final between the first two input teams closes the
/// bracket at round `2L`. Actual losers are not propagated between brackets.
pub fn generate_double_elimination<R: Rng + ?Sized>(teams: &[Team], rng: &mut R) -> Vec<GameMatch> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let winners = generate_single_elimination(teams, rng);
    let losers_rounds = elimination_rounds(teams.len());

    let mut matches = Vec::with_capacity(winners.len() * 2 + 1);
    for m in winners {
        let losers_twin = match (m.round, m.bracket_position) {
            (Some(round), Some(position)) if round < losers_rounds => Some(
                GameMatch::new(m.team_a_id, m.team_b_id).in_round(round + losers_rounds, position),
            ),
            _ => None,
        };
        matches.push(m);
        matches.extend(losers_twin);
    }

    matches.push(GameMatch::new(teams[0].id, teams[1].id).in_round(losers_rounds * 2, 1));

    debug!(
        "Double elimination: {} teams, {} matches including grand final",
        teams.len(),
        matches.len()
    );
    matches
}
