//! Tournament bracket engine: library with models and bracket/scheduling logic.

pub mod logic;
pub mod models;

pub use logic::{
    detect_conflicts, elimination_rounds, generate_bracket, generate_bracket_with_rng,
    generate_double_elimination, generate_pools, generate_round_robin, generate_single_elimination,
    pool_label, schedule_matches,
};
pub use models::{
    Bracket, BracketRequest, BracketType, DayRollover, GameMatch, MatchId, PoolAssignments, PoolPlay,
    SettingsError, Team, TeamId, TournamentSettings, DEFAULT_POOL_COUNT, DEFAULT_POOL_SIZE,
};
