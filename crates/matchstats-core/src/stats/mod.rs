// Aggregation engine: filtering, goal sums, standings, rankings, outcomes.
//
// Every function here is pure and takes its input by reference. Functions
// over matches accept any iterator of `&Match`, so a filtered `Vec<&Match>`
// and the full `&[Match]` dataset can be passed interchangeably.

pub mod filter;
pub mod goals;
pub mod outcome;
pub mod ranking;
pub mod standings;

pub use filter::{filter_by_league_and_season, filter_players};
pub use goals::{
    aggregate_goals_by_team, average_goals_per_match, goal_differential, merge_goal_totals,
    rank_team_goals, round_to_tenth, team_season_goals, TeamGoals,
};
pub use outcome::{outcome_distribution, Outcome, OutcomeDistribution, RoundedOutcome};
pub use ranking::top_scorers;
pub use standings::{build_standings, standings_order, TeamStanding};
