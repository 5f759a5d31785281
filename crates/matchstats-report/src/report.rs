// Report assembly: resolve the league/season/team selection, run every
// aggregation and collect the results into one serializable `Report`.
//
// The filtered sections (listing, team goals, scorers, table) cover the
// selected league and season. Differentials, the average and the outcome
// split always cover the full match dataset.

use matchstats_core::defaults::{infer_league, infer_team, latest_season};
use matchstats_core::stats::{
    aggregate_goals_by_team, average_goals_per_match, build_standings,
    filter_by_league_and_season, goal_differential, outcome_distribution, rank_team_goals,
    team_season_goals, top_scorers, OutcomeDistribution, TeamGoals, TeamStanding,
};
use matchstats_core::{Match, PlayerRecord};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::SelectionConfig;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The league, season and (optional) team a report is built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub league: String,
    pub season: i32,
    pub team: Option<String>,
}

impl Selection {
    /// Fill in whatever `config` leaves unset from the match data.
    ///
    /// An unresolvable league is the empty string and an unresolvable season
    /// is 0; both simply select nothing.
    pub fn resolve(matches: &[Match], config: &SelectionConfig) -> Self {
        let league = config
            .league
            .clone()
            .or_else(|| infer_league(matches, config.preferred_league.as_deref()))
            .unwrap_or_default();
        let league_scope = (!league.is_empty()).then_some(league.as_str());

        let season = config
            .season
            .or_else(|| latest_season(matches, league_scope))
            .unwrap_or(0);
        let season_scope = (season != 0).then_some(season);

        let team = config.team.clone().or_else(|| {
            infer_team(
                matches,
                league_scope,
                season_scope,
                config.preferred_team.as_deref(),
            )
        });

        let selection = Self {
            league,
            season,
            team,
        };
        info!(
            "Report selection: league='{}', season={}, team={:?}",
            selection.league, selection.season, selection.team
        );
        selection
    }
}

// ---------------------------------------------------------------------------
// Report rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifferentialLine {
    pub home_team: String,
    pub away_team: String,
    pub differential: i64,
}

/// Goals of the selected team in the selected season, across all leagues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamFocus {
    pub team: String,
    pub season: i32,
    pub goals: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorerLine {
    pub rank: usize,
    pub player: String,
    pub team: String,
    pub goals: u32,
}

/// A table row with the derived columns spelled out for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRow {
    pub team: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl From<&TeamStanding> for StandingRow {
    fn from(s: &TeamStanding) -> Self {
        Self {
            team: s.team.clone(),
            played: s.played(),
            wins: s.wins,
            draws: s.draws,
            losses: s.losses,
            goals_for: s.goals_for,
            goals_against: s.goals_against,
            goal_difference: s.goal_difference(),
            points: s.points(),
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub selection: Selection,
    pub season_matches: Vec<Match>,
    pub differentials: Vec<DifferentialLine>,
    pub team_goals: Vec<TeamGoals>,
    pub team_focus: Option<TeamFocus>,
    pub top_scorers_limit: usize,
    pub top_scorers: Vec<ScorerLine>,
    pub average_goals: f64,
    pub standings: Vec<StandingRow>,
    pub outcomes: OutcomeDistribution,
}

/// Run every aggregation for `selection`.
pub fn build_report(
    matches: &[Match],
    players: &[PlayerRecord],
    selection: Selection,
    top_n: usize,
) -> Report {
    let filtered = filter_by_league_and_season(matches, &selection.league, selection.season);
    debug!(
        "{} of {} matches in {} {}",
        filtered.len(),
        matches.len(),
        selection.league,
        selection.season
    );

    let differentials = matches
        .iter()
        .map(|m| DifferentialLine {
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            differential: goal_differential(m),
        })
        .collect();

    let team_goals = rank_team_goals(aggregate_goals_by_team(filtered.iter().copied()));

    let team_focus = selection.team.as_ref().map(|team| TeamFocus {
        team: team.clone(),
        season: selection.season,
        goals: team_season_goals(matches, team, selection.season),
    });

    let scorers = top_scorers(players, &selection.league, selection.season, top_n)
        .into_iter()
        .enumerate()
        .map(|(idx, p)| ScorerLine {
            rank: idx + 1,
            player: p.player.clone(),
            team: p.team.clone(),
            goals: p.goals,
        })
        .collect();

    let standings = build_standings(filtered.iter().copied())
        .iter()
        .map(StandingRow::from)
        .collect();

    Report {
        season_matches: filtered.into_iter().cloned().collect(),
        differentials,
        team_goals,
        team_focus,
        top_scorers_limit: top_n,
        top_scorers: scorers,
        average_goals: average_goals_per_match(matches),
        standings,
        outcomes: outcome_distribution(matches),
        selection,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
