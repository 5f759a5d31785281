// League table: win/draw/loss records per team and the table ordering.
//
// Each match is turned into two single-match records (one per side), which
// are folded into a map keyed by team name with `TeamStanding::merge`. The
// map's iteration order never leaks: the finished rows are always sorted with
// `standings_order`, whose last key is the team name.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Match;

// ---------------------------------------------------------------------------
// TeamStanding
// ---------------------------------------------------------------------------

/// Accumulated record of one team. Goal difference and points are derived on
/// read and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl TeamStanding {
    /// Record of a single match from one team's point of view.
    pub fn from_result(team: impl Into<String>, scored: u32, conceded: u32) -> Self {
        let (wins, draws, losses) = match scored.cmp(&conceded) {
            Ordering::Greater => (1, 0, 0),
            Ordering::Equal => (0, 1, 0),
            Ordering::Less => (0, 0, 1),
        };
        Self {
            team: team.into(),
            wins,
            draws,
            losses,
            goals_for: scored,
            goals_against: conceded,
        }
    }

    /// Combine two records of the same team. Counters saturate at
    /// `u32::MAX`.
    pub fn merge(self, other: &TeamStanding) -> Self {
        debug_assert_eq!(self.team, other.team);
        Self {
            team: self.team,
            wins: self.wins.saturating_add(other.wins),
            draws: self.draws.saturating_add(other.draws),
            losses: self.losses.saturating_add(other.losses),
            goals_for: self.goals_for.saturating_add(other.goals_for),
            goals_against: self.goals_against.saturating_add(other.goals_against),
        }
    }

    pub fn played(&self) -> u32 {
        self.wins
            .saturating_add(self.draws)
            .saturating_add(self.losses)
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// Three points per win, one per draw.
    pub fn points(&self) -> u32 {
        self.wins.saturating_mul(3).saturating_add(self.draws)
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Table order: points, goal difference and goals scored descending, then
/// team name ascending. Two rows only compare equal when they share a name.
pub fn standings_order(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team.cmp(&b.team))
}

// ---------------------------------------------------------------------------
// Table construction
// ---------------------------------------------------------------------------

/// Build the league table for `matches`, sorted with `standings_order`.
pub fn build_standings<'a, I>(matches: I) -> Vec<TeamStanding>
where
    I: IntoIterator<Item = &'a Match>,
{
    let table = matches
        .into_iter()
        .flat_map(|m| {
            [
                TeamStanding::from_result(m.home_team.as_str(), m.home_goals, m.away_goals),
                TeamStanding::from_result(m.away_team.as_str(), m.away_goals, m.home_goals),
            ]
        })
        .fold(
            HashMap::<String, TeamStanding>::new(),
            |mut table, record| {
                let merged = match table.remove(&record.team) {
                    Some(existing) => existing.merge(&record),
                    None => record,
                };
                table.insert(merged.team.clone(), merged);
                table
            },
        );

    let mut rows: Vec<TeamStanding> = table.into_values().collect();
    rows.sort_by(standings_order);
    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
