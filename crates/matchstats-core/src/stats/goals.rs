// Goal arithmetic: per-match differentials, per-team sums, averages.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Match;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One row of the ranked goal totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGoals {
    pub team: String,
    pub goals: u32,
}

// ---------------------------------------------------------------------------
// Per match
// ---------------------------------------------------------------------------

/// Home goals minus away goals.
pub fn goal_differential(m: &Match) -> i64 {
    i64::from(m.home_goals) - i64::from(m.away_goals)
}

// ---------------------------------------------------------------------------
// Per team
// ---------------------------------------------------------------------------

fn credit(totals: &mut HashMap<String, u32>, team: &str, goals: u32) {
    let total = totals.entry(team.to_string()).or_insert(0);
    *total = total.saturating_add(goals);
}

/// Sum the goals each team scored across `matches`, home and away.
/// Totals saturate at `u32::MAX`.
pub fn aggregate_goals_by_team<'a, I>(matches: I) -> HashMap<String, u32>
where
    I: IntoIterator<Item = &'a Match>,
{
    matches.into_iter().fold(HashMap::new(), |mut totals, m| {
        credit(&mut totals, &m.home_team, m.home_goals);
        credit(&mut totals, &m.away_team, m.away_goals);
        totals
    })
}

/// Merge two partial goal aggregates by adding totals per team.
///
/// Merging is commutative and associative, so partitions of a dataset can be
/// aggregated independently and combined in any order.
pub fn merge_goal_totals(
    mut left: HashMap<String, u32>,
    right: HashMap<String, u32>,
) -> HashMap<String, u32> {
    for (team, goals) in right {
        let total = left.entry(team).or_insert(0);
        *total = total.saturating_add(goals);
    }
    left
}

/// Materialize goal totals in display order: most goals first, ties by team
/// name ascending.
pub fn rank_team_goals(totals: HashMap<String, u32>) -> Vec<TeamGoals> {
    let mut rows: Vec<TeamGoals> = totals
        .into_iter()
        .map(|(team, goals)| TeamGoals { team, goals })
        .collect();
    rows.sort_by(|a, b| match b.goals.cmp(&a.goals) {
        Ordering::Equal => a.team.cmp(&b.team),
        other => other,
    });
    rows
}

/// Goals scored by `team` in every match of `season`, across all leagues.
pub fn team_season_goals(matches: &[Match], team: &str, season: i32) -> u32 {
    matches
        .iter()
        .filter(|m| m.season == season)
        .map(|m| {
            let home = if m.home_team == team { m.home_goals } else { 0 };
            let away = if m.away_team == team { m.away_goals } else { 0 };
            home.saturating_add(away)
        })
        .fold(0, u32::saturating_add)
}

// ---------------------------------------------------------------------------
// Averages
// ---------------------------------------------------------------------------

/// Mean of home plus away goals per match; `0.0` when there are no matches.
pub fn average_goals_per_match<'a, I>(matches: I) -> f64
where
    I: IntoIterator<Item = &'a Match>,
{
    let (count, goals) = matches
        .into_iter()
        .fold((0u64, 0u64), |(count, goals), m| {
            (count + 1, goals + u64::from(m.total_goals()))
        });
    if count == 0 {
        0.0
    } else {
        goals as f64 / count as f64
    }
}

/// Round to one decimal place, halves away from zero (2.25 -> 2.3).
///
/// `format!("{:.1}")` alone would print 2.25 as "2.2".
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
