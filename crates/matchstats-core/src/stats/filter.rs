// League/season selection over match and player records.

use crate::model::{Match, PlayerRecord};

/// Matches of exactly `league` and `season`, in input order.
///
/// An unknown league or season yields an empty vector.
pub fn filter_by_league_and_season<'a>(
    matches: &'a [Match],
    league: &str,
    season: i32,
) -> Vec<&'a Match> {
    matches.iter().filter(|m| m.is_in(league, season)).collect()
}

/// Player records of exactly `league` and `season`, in input order.
pub fn filter_players<'a>(
    players: &'a [PlayerRecord],
    league: &str,
    season: i32,
) -> Vec<&'a PlayerRecord> {
    players.iter().filter(|p| p.is_in(league, season)).collect()
}
