// Home win / away win / draw distribution.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::Match;

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of a match from the home side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Home,
    Away,
    Draw,
}

impl Outcome {
    pub fn of(m: &Match) -> Self {
        match m.home_goals.cmp(&m.away_goals) {
            Ordering::Greater => Outcome::Home,
            Ordering::Less => Outcome::Away,
            Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Home => "HOME",
            Outcome::Away => "AWAY",
            Outcome::Draw => "DRAW",
        }
    }
}

// ---------------------------------------------------------------------------
// Distribution
// ---------------------------------------------------------------------------

/// Outcome counts and their share of all matches, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    pub home_wins: u64,
    pub away_wins: u64,
    pub draws: u64,
    pub total: u64,
    pub home_pct: f64,
    pub away_pct: f64,
    pub draw_pct: f64,
}

/// Percentages rounded one by one. They are not adjusted to add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedOutcome {
    pub home_pct: u32,
    pub away_pct: u32,
    pub draw_pct: u32,
}

impl OutcomeDistribution {
    pub fn rounded(&self) -> RoundedOutcome {
        RoundedOutcome {
            home_pct: self.home_pct.round() as u32,
            away_pct: self.away_pct.round() as u32,
            draw_pct: self.draw_pct.round() as u32,
        }
    }
}

/// Classify every match and report each bucket as a share of the total.
/// All percentages are zero when there are no matches.
pub fn outcome_distribution<'a, I>(matches: I) -> OutcomeDistribution
where
    I: IntoIterator<Item = &'a Match>,
{
    let (home_wins, away_wins, draws) =
        matches
            .into_iter()
            .fold((0u64, 0u64, 0u64), |(h, a, d), m| match Outcome::of(m) {
                Outcome::Home => (h + 1, a, d),
                Outcome::Away => (h, a + 1, d),
                Outcome::Draw => (h, a, d + 1),
            });
    let total = home_wins + away_wins + draws;
    let pct = |count: u64| {
        if total == 0 {
            0.0
        } else {
            100.0 * count as f64 / total as f64
        }
    };

    OutcomeDistribution {
        home_wins,
        away_wins,
        draws,
        total,
        home_pct: pct(home_wins),
        away_pct: pct(away_wins),
        draw_pct: pct(draws),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
