//! Match (game) produced by the generators and stamped by the scheduler.

use crate::models::team::TeamId;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match, assigned on persistence.
pub type MatchId = Uuid;

/// A single match between two teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    /// None until a persistence collaborator stores the match.
    #[serde(default)]
    pub id: Option<MatchId>,
    pub team_a_id: TeamId,
    pub team_b_id: TeamId,
    /// None until scheduled.
    #[serde(default)]
    pub scheduled_time: Option<NaiveDateTime>,
    /// None until scheduled.
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub pool: Option<String>,
    /// 1-based round (elimination formats only).
    #[serde(default)]
    pub round: Option<u32>,
    /// 1-based position within the round (elimination formats only).
    #[serde(default)]
    pub bracket_position: Option<u32>,
}

impl GameMatch {
    pub fn new(team_a_id: TeamId, team_b_id: TeamId) -> Self {
        Self {
            id: None,
            team_a_id,
            team_b_id,
            scheduled_time: None,
            field: None,
            pool: None,
            round: None,
            bracket_position: None,
        }
    }

    /// Set round and bracket position (elimination bookkeeping).
    pub fn in_round(mut self, round: u32, bracket_position: u32) -> Self {
        self.round = Some(round);
        self.bracket_position = Some(bracket_position);
        self
    }

    /// Tag the match with a pool label.
    pub fn in_pool(mut self, pool: impl Into<String>) -> Self {
        self.pool = Some(pool.into());
        self
    }

    /// Both team ids, team A first.
    pub fn teams(&self) -> [TeamId; 2] {
        [self.team_a_id, self.team_b_id]
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.team_a_id == team || self.team_b_id == team
    }

    /// True if at least one team plays in both matches.
    pub fn shares_team_with(&self, other: &GameMatch) -> bool {
        self.teams().iter().any(|&t| other.involves(t))
    }

    /// Half-open `[start, start + duration)` window, if scheduled and representable.
    pub fn time_window(&self, duration_minutes: u32) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = self.scheduled_time?;
        let end = start.checked_add_signed(Duration::minutes(i64::from(duration_minutes)))?;
        Some((start, end))
    }
}
