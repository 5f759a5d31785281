// CSV import for match results and player statistics.
//
// Files are split on a plain delimiter: the header line is skipped, blank
// lines are ignored and there is no quoting or escaping. Columns are read by
// position. Numeric fields that do not parse become 0 instead of rejecting
// the row; only rows too short to hold the required columns are dropped.

use std::io::Read;
use std::path::{Path, PathBuf};

use matchstats_core::{Match, PlayerRecord};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::DataConfig;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Column layout of the matches file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLayout {
    /// Pick `Extended` when the header has a `Country` or `HG` column,
    /// `Compact` otherwise.
    #[default]
    Auto,
    /// `date, season, league, home, away, hg, ag[, hy, ay, hp, ap]`
    Compact,
    /// `Country, League, Season, Date, Time, Home, Away, HG, AG, Res, ...`
    Extended,
}

#[derive(Debug, Clone, Copy)]
pub struct ImportOptions {
    pub delimiter: u8,
    pub match_layout: MatchLayout,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            match_layout: MatchLayout::Auto,
        }
    }
}

impl From<&DataConfig> for ImportOptions {
    fn from(data: &DataConfig) -> Self {
        Self {
            delimiter: data.delimiter,
            match_layout: data.match_layout,
        }
    }
}

/// Both decoded datasets.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub matches: Vec<Match>,
    pub players: Vec<PlayerRecord>,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

/// Season year from a "2024" or "2012/2013" token; the first year wins.
/// Anything unparseable is season 0.
pub fn parse_season(token: &str) -> i32 {
    let token = token.trim();
    let year = match token.find('/') {
        Some(slash) if slash > 0 => &token[..slash],
        _ => token,
    };
    year.trim().parse().unwrap_or(0)
}

/// Non-negative count (goals, cards, possession). Unparseable or negative
/// values are 0.
pub fn parse_count(token: &str) -> u32 {
    token.trim().parse().unwrap_or(0)
}

fn field<'r>(record: &'r csv::StringRecord, idx: usize) -> &'r str {
    record.get(idx).map(str::trim).unwrap_or("")
}

fn count_at(record: &csv::StringRecord, idx: usize) -> u32 {
    record.get(idx).map(parse_count).unwrap_or(0)
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(|f| f.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Row decoding
// ---------------------------------------------------------------------------

const COMPACT_MIN_COLUMNS: usize = 7;
const EXTENDED_MIN_COLUMNS: usize = 9;
const PLAYER_MIN_COLUMNS: usize = 5;

fn detect_layout(headers: &csv::StringRecord) -> MatchLayout {
    let extended = headers
        .iter()
        .any(|h| h.trim().eq_ignore_ascii_case("country") || h.trim().eq_ignore_ascii_case("hg"));
    if extended {
        MatchLayout::Extended
    } else {
        MatchLayout::Compact
    }
}

fn compact_match(record: &csv::StringRecord) -> Match {
    Match {
        date: field(record, 0).to_string(),
        season: parse_season(field(record, 1)),
        league: field(record, 2).to_string(),
        home_team: field(record, 3).to_string(),
        away_team: field(record, 4).to_string(),
        home_goals: count_at(record, 5),
        away_goals: count_at(record, 6),
        home_yellow: count_at(record, 7),
        away_yellow: count_at(record, 8),
        home_possession: count_at(record, 9),
        away_possession: count_at(record, 10),
    }
}

/// The extended export carries no card or possession data.
fn extended_match(record: &csv::StringRecord) -> Match {
    Match::new(
        field(record, 3),
        parse_season(field(record, 2)),
        field(record, 1),
        field(record, 5),
        field(record, 6),
        count_at(record, 7),
        count_at(record, 8),
    )
}

fn player_record(record: &csv::StringRecord) -> PlayerRecord {
    PlayerRecord::new(
        field(record, 0),
        field(record, 1),
        field(record, 2),
        parse_season(field(record, 3)),
        count_at(record, 4),
    )
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

fn csv_reader<R: Read>(rdr: R, opts: &ImportOptions) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .delimiter(opts.delimiter)
        .from_reader(rdr)
}

fn load_matches_from_reader<R: Read>(
    rdr: R,
    opts: &ImportOptions,
) -> Result<Vec<Match>, csv::Error> {
    let mut reader = csv_reader(rdr, opts);
    let layout = match opts.match_layout {
        MatchLayout::Auto => detect_layout(reader.headers()?),
        explicit => explicit,
    };
    let (min_columns, decode): (usize, fn(&csv::StringRecord) -> Match) = match layout {
        MatchLayout::Extended => (EXTENDED_MIN_COLUMNS, extended_match),
        _ => (COMPACT_MIN_COLUMNS, compact_match),
    };

    let mut matches = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                if is_blank(&record) {
                    continue;
                }
                if record.len() < min_columns {
                    warn!(
                        "skipping match row {}: {} columns, expected at least {}",
                        idx + 1,
                        record.len(),
                        min_columns
                    );
                    continue;
                }
                matches.push(decode(&record));
            }
            Err(e) => {
                warn!("skipping malformed match row: {}", e);
            }
        }
    }
    Ok(matches)
}

fn load_players_from_reader<R: Read>(
    rdr: R,
    opts: &ImportOptions,
) -> Result<Vec<PlayerRecord>, csv::Error> {
    let mut reader = csv_reader(rdr, opts);
    let mut players = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                if is_blank(&record) {
                    continue;
                }
                if record.len() < PLAYER_MIN_COLUMNS {
                    warn!(
                        "skipping player row {}: {} columns, expected at least {}",
                        idx + 1,
                        record.len(),
                        PLAYER_MIN_COLUMNS
                    );
                    continue;
                }
                players.push(player_record(&record));
            }
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
            }
        }
    }
    Ok(players)
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

/// Load match results from a CSV file.
pub fn load_matches(path: &Path, opts: &ImportOptions) -> Result<Vec<Match>, ImportError> {
    let file = std::fs::File::open(path).map_err(|e| ImportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_matches_from_reader(file, opts).map_err(|e| ImportError::Csv {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load player statistics from a CSV file.
pub fn load_players(path: &Path, opts: &ImportOptions) -> Result<Vec<PlayerRecord>, ImportError> {
    let file = std::fs::File::open(path).map_err(|e| ImportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_players_from_reader(file, opts).map_err(|e| ImportError::Csv {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load both datasets named in the data config.
pub fn load_all(data: &DataConfig) -> Result<Dataset, ImportError> {
    let opts = ImportOptions::from(data);
    let matches = load_matches(&data.matches, &opts)?;
    let players = load_players(&data.players, &opts)?;
    info!(
        "Imported {} matches from {}, {} player rows from {}",
        matches.len(),
        data.matches.display(),
        players.len(),
        data.players.display()
    );
    Ok(Dataset { matches, players })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
