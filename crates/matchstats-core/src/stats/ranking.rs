// Top-scorer ranking.

use crate::model::PlayerRecord;
use crate::stats::filter::filter_players;

/// The `n` highest scorers of `league` in `season`, most goals first.
///
/// Players with equal goals keep their input order: `sort_by` is stable and
/// no secondary key is applied. Callers that need a different tie-break must
/// sort the result themselves.
pub fn top_scorers<'a>(
    players: &'a [PlayerRecord],
    league: &str,
    season: i32,
    n: usize,
) -> Vec<&'a PlayerRecord> {
    let mut scoped = filter_players(players, league, season);
    scoped.sort_by(|a, b| b.goals.cmp(&a.goals));
    scoped.truncate(n);
    scoped
}
