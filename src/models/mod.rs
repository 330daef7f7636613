//! Data structures for bracket generation: teams, matches, settings, outputs.

mod bracket;
mod game;
mod request;
mod settings;
mod team;

pub use bracket::{Bracket, PoolAssignments, PoolPlay};
pub use game::{GameMatch, MatchId};
pub use request::BracketRequest;
pub use settings::{
    BracketType, DayRollover, SettingsError, TournamentSettings, DEFAULT_POOL_COUNT,
    DEFAULT_POOL_SIZE,
};
pub use team::{Team, TeamId};
