//! Generation outputs: the scheduled bracket and pool play results.

use crate::models::game::GameMatch;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Team id → pool label (e.g. "Pool A").
pub type PoolAssignments = HashMap<TeamId, String>;

/// Matches and pool membership produced by pool play generation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PoolPlay {
    pub matches: Vec<GameMatch>,
    pub assignments: PoolAssignments,
}

impl PoolPlay {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.assignments.is_empty()
    }

    /// Team ids in the given pool, in no particular order.
    pub fn teams_in(&self, pool: &str) -> Vec<TeamId> {
        self.assignments
            .iter()
            .filter(|(_, label)| label.as_str() == pool)
            .map(|(&id, _)| id)
            .collect()
    }
}

/// Final output of a bracket generation call.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    /// Scheduled matches, ready to be persisted as one batch.
    pub matches: Vec<GameMatch>,
    /// Only set for pool play.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_assignments: Option<PoolAssignments>,
}

impl Bracket {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
