// Default-selection helpers for report drivers.
//
// These pick a league, season and team when the caller has not named one.
// The preferred names are always passed in by the caller; nothing here knows
// about any particular league or club. The aggregation functions in `stats`
// never call into this module.

use std::collections::HashMap;

use tracing::debug;

use crate::model::Match;

/// Pick a league: `preferred` when it occurs in `matches`, otherwise the most
/// frequent league (equal counts resolved by name, ascending).
///
/// Returns `None` only when `matches` is empty.
pub fn infer_league(matches: &[Match], preferred: Option<&str>) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for m in matches {
        *counts.entry(m.league.as_str()).or_insert(0) += 1;
    }

    if let Some(name) = preferred.filter(|name| counts.contains_key(name)) {
        debug!("using preferred league '{}'", name);
        return Some(name.to_string());
    }

    let picked = counts
        .into_iter()
        .max_by(|(a_name, a_count), (b_name, b_count)| {
            a_count.cmp(b_count).then_with(|| b_name.cmp(a_name))
        })
        .map(|(name, _)| name.to_string());
    if let Some(name) = &picked {
        debug!("using most frequent league '{}'", name);
    }
    picked
}

/// Most recent season among matches of `league` (of any league when `None`).
pub fn latest_season(matches: &[Match], league: Option<&str>) -> Option<i32> {
    matches
        .iter()
        .filter(|m| league.map_or(true, |l| m.league == l))
        .map(|m| m.season)
        .max()
}

/// Pick a team among those appearing in matches of `league` and `season`
/// (either filter may be `None`): `preferred` when it appears, otherwise the
/// team with the most appearances, earliest first appearance winning ties.
pub fn infer_team(
    matches: &[Match],
    league: Option<&str>,
    season: Option<i32>,
    preferred: Option<&str>,
) -> Option<String> {
    // (first appearance, appearances) per team.
    let mut seen: HashMap<&str, (usize, usize)> = HashMap::new();
    let scoped = matches
        .iter()
        .filter(|m| league.map_or(true, |l| m.league == l))
        .filter(|m| season.map_or(true, |s| m.season == s));
    for team in scoped.flat_map(|m| [m.home_team.as_str(), m.away_team.as_str()]) {
        let next = seen.len();
        seen.entry(team).or_insert((next, 0)).1 += 1;
    }

    if let Some(name) = preferred.filter(|name| seen.contains_key(name)) {
        debug!("using preferred team '{}'", name);
        return Some(name.to_string());
    }

    let picked = seen
        .into_iter()
        .max_by(|(_, (a_first, a_count)), (_, (b_first, b_count))| {
            a_count.cmp(b_count).then_with(|| b_first.cmp(a_first))
        })
        .map(|(name, _)| name.to_string());
    if let Some(name) = &picked {
        debug!("using most frequent team '{}'", name);
    }
    picked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
