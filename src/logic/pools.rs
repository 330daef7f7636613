//! Pool play: split teams into labeled pools, round robin inside each pool.

use crate::logic::round_robin::generate_round_robin;
use crate::models::{PoolAssignments, PoolPlay, Team};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Label for a zero-based pool index: "Pool A", "Pool B", ..., "Pool Z", "Pool AA", ...
pub fn pool_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    let suffix: String = letters.into_iter().rev().collect();
    format!("Pool {}", suffix)
}

/// Assign teams to `pool_count` pools and generate round robin matches per pool.
///
/// Fewer teams than pools (or zero pools) gives an empty result. Teams are
/// shuffled with `rng`, then shuffled index `i` goes to pool `i % pool_count`.
/// `pool_size` does not cap membership; oversized pools are only logged.
pub fn generate_pools<R: Rng + ?Sized>(
    teams: &[Team],
    pool_count: usize,
    pool_size: usize,
    rng: &mut R,
) -> PoolPlay {
    if pool_count == 0 || teams.len() < pool_count {
        debug!(
            "Pools: {} teams cannot fill {} pools, nothing generated",
            teams.len(),
            pool_count
        );
        return PoolPlay::default();
    }

    let mut shuffled: Vec<Team> = teams.to_vec();
    shuffled.shuffle(rng);

    let mut pools: Vec<Vec<Team>> = vec![Vec::new(); pool_count];
    let mut assignments = PoolAssignments::with_capacity(teams.len());
    for (i, team) in shuffled.into_iter().enumerate() {
        let pool_index = i % pool_count;
        assignments.insert(team.id, pool_label(pool_index));
        pools[pool_index].push(team);
    }

    let mut matches = Vec::new();
    for (pool_index, pool_teams) in pools.iter().enumerate() {
        let label = pool_label(pool_index);
        if pool_teams.len() > pool_size {
            debug!(
                "{} has {} teams, above the advisory pool size {}",
                label,
                pool_teams.len(),
                pool_size
            );
        }
        matches.extend(
            generate_round_robin(pool_teams)
                .into_iter()
                .map(|m| m.in_pool(label.clone())),
        );
    }

    debug!(
        "Pools: {} teams in {} pools, {} matches",
        teams.len(),
        pool_count,
        matches.len()
    );
    PoolPlay {
        matches,
        assignments,
    }
}
