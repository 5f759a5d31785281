// Record types for decoded match results and player statistics.
//
// Both records are plain values: the engine only ever reads them. Numeric
// fields hold whatever the decoder produced, and zero is ordinary data here,
// never a "missing" marker.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// A single played match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Date token exactly as it appeared in the source; not validated.
    pub date: String,
    /// First year of the season ("2012/2013" is stored as 2012).
    pub season: i32,
    pub league: String,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    #[serde(default)]
    pub home_yellow: u32,
    #[serde(default)]
    pub away_yellow: u32,
    #[serde(default)]
    pub home_possession: u32,
    #[serde(default)]
    pub away_possession: u32,
}

impl Match {
    /// Build a match with the card and possession fields zeroed.
    pub fn new(
        date: impl Into<String>,
        season: i32,
        league: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        Self {
            date: date.into(),
            season,
            league: league.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_goals,
            away_goals,
            home_yellow: 0,
            away_yellow: 0,
            home_possession: 0,
            away_possession: 0,
        }
    }

    /// Total goals scored by both sides.
    pub fn total_goals(&self) -> u32 {
        self.home_goals.saturating_add(self.away_goals)
    }

    /// Whether this match belongs to the given league and season.
    /// League names compare exactly, including case.
    pub fn is_in(&self, league: &str, season: i32) -> bool {
        self.league == league && self.season == season
    }
}

// ---------------------------------------------------------------------------
// PlayerRecord
// ---------------------------------------------------------------------------

/// Goals scored by one player for one team in one league season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player: String,
    pub team: String,
    pub league: String,
    pub season: i32,
    pub goals: u32,
}

impl PlayerRecord {
    pub fn new(
        player: impl Into<String>,
        team: impl Into<String>,
        league: impl Into<String>,
        season: i32,
        goals: u32,
    ) -> Self {
        Self {
            player: player.into(),
            team: team.into(),
            league: league.into(),
            season,
            goals,
        }
    }

    pub fn is_in(&self, league: &str, season: i32) -> bool {
        self.league == league && self.season == season
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
