//! Bracket business logic: pairing, elimination, pools, scheduling, conflicts.

mod bracket;
mod conflicts;
mod elimination;
mod pools;
mod round_robin;
mod scheduler;

pub use bracket::{generate_bracket, generate_bracket_with_rng};
pub use conflicts::detect_conflicts;
pub use elimination::{elimination_rounds, generate_double_elimination, generate_single_elimination};
pub use pools::{generate_pools, pool_label};
pub use round_robin::generate_round_robin;
pub use scheduler::schedule_matches;
