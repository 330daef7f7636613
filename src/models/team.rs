//! Team data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in matches and pool assignments).
pub type TeamId = Uuid;

/// A team on the roster. Owned by the caller; the engine only reads it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Generated when missing from the input.
    #[serde(default = "Uuid::new_v4")]
    pub id: TeamId,
    pub name: String,
}

impl Team {
    /// Create a new team with the given name and a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
