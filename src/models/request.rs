//! JSON request accepted by the `bracket` binary.

use crate::models::settings::TournamentSettings;
use crate::models::team::Team;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Teams, settings and start date for one generation call.
///
/// Every settings key is optional; team ids are generated when missing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketRequest {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub settings: TournamentSettings,
    /// Today (local time) when not set.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl BracketRequest {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn start_date_or_today(&self) -> NaiveDate {
        self.start_date.unwrap_or_else(|| Local::now().date_naive())
    }
}
