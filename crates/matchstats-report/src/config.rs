// Configuration loading and parsing (config/report.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::import::MatchLayout;

/// Name of the single config file inside `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "report.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub data: DataConfig,
    pub selection: SelectionConfig,
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// report.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire report.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ReportFile {
    data: DataSection,
    #[serde(default)]
    selection: SelectionConfig,
    #[serde(default)]
    report: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct DataSection {
    matches: String,
    players: String,
    #[serde(default = "default_delimiter")]
    delimiter: char,
    #[serde(default)]
    match_layout: MatchLayout,
}

/// Input files and how to split them. Paths are resolved against the base
/// directory the config was loaded from.
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub matches: PathBuf,
    pub players: PathBuf,
    pub delimiter: u8,
    pub match_layout: MatchLayout,
}

/// Which league, season and team the filtered reports cover.
///
/// Explicit values are used as given. Missing ones are inferred from the
/// match data, preferring `preferred_league` / `preferred_team` when those
/// occur in it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionConfig {
    pub league: Option<String>,
    pub season: Option<i32>,
    pub team: Option<String>,
    pub preferred_league: Option<String>,
    pub preferred_team: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_top_scorers")]
    pub top_scorers: usize,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            top_scorers: default_top_scorers(),
            format: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_delimiter() -> char {
    ','
}

fn default_top_scorers() -> usize {
    5
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/report.toml` relative to `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    parse_config(&text, &path, base_dir)
}

/// Parse report.toml text. `path` is only used in error messages; relative
/// data paths are joined onto `base_dir`.
pub fn parse_config(text: &str, path: &Path, base_dir: &Path) -> Result<Config, ConfigError> {
    let file: ReportFile = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate(&file)?;

    let data = DataConfig {
        matches: base_dir.join(&file.data.matches),
        players: base_dir.join(&file.data.players),
        // validate() guarantees a single-byte ASCII delimiter.
        delimiter: file.data.delimiter as u8,
        match_layout: file.data.match_layout,
    };

    Ok(Config {
        data,
        selection: file.selection,
        output: file.report,
    })
}

/// Seed `config/report.toml` from `defaults/report.toml` on first run.
///
/// Returns the path that was written, or `None` when a config file already
/// exists. An existing config is never overwritten, and nothing else in
/// `defaults/` is copied.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let config_dir = base_dir.join("config");
    let target = config_dir.join(CONFIG_FILE);
    if target.exists() {
        return Ok(None);
    }

    let source = base_dir.join("defaults").join(CONFIG_FILE);
    if !source.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither {} nor {} found; run from the project root or pass --config <dir>",
                target.display(),
                source.display()
            ),
        });
    }

    let copy_failed = |e: std::io::Error| ConfigError::DefaultsCopyError {
        message: format!(
            "failed to copy {} to {}: {e}",
            source.display(),
            target.display()
        ),
    };
    std::fs::create_dir_all(&config_dir).map_err(copy_failed)?;
    std::fs::copy(&source, &target).map_err(copy_failed)?;
    info!("Seeded {} from {}", target.display(), source.display());

    Ok(Some(target))
}

/// Seed the config from defaults if needed, then load it.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_file(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(file: &ReportFile) -> Result<(), ConfigError> {
    let path_fields: &[(&str, &str)] = &[
        ("data.matches", file.data.matches.as_str()),
        ("data.players", file.data.players.as_str()),
    ];
    for (name, val) in path_fields {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    let delimiter = file.data.delimiter;
    if !delimiter.is_ascii() || delimiter == '\n' || delimiter == '\r' {
        return Err(ConfigError::ValidationError {
            field: "data.delimiter".into(),
            message: format!("must be a single ASCII character other than a newline, got {delimiter:?}"),
        });
    }

    if file.report.top_scorers == 0 {
        return Err(ConfigError::ValidationError {
            field: "report.top_scorers".into(),
            message: "must be > 0".into(),
        });
    }

    if let Some(league) = &file.selection.league {
        if league.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "selection.league".into(),
                message: "must not be empty when set".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MINIMAL: &str = r#"
[data]
matches = "data/matches.csv"
players = "data/players.csv"
"#;

    fn parse(text: &str) -> Result<Config, ConfigError> {
        parse_config(text, Path::new("config/report.toml"), Path::new("/base"))
    }

    /// Helper: a fresh, empty scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("matchstats_config_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    // -- Parsing --

    #[test]
    fn minimal_config_uses_defaults() {
        let config = parse(MINIMAL).expect("minimal config should parse");
        assert_eq!(config.data.matches, PathBuf::from("/base/data/matches.csv"));
        assert_eq!(config.data.players, PathBuf::from("/base/data/players.csv"));
        assert_eq!(config.data.delimiter, b',');
        assert_eq!(config.data.match_layout, MatchLayout::Auto);
        assert_eq!(config.output.top_scorers, 5);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.selection.league.is_none());
        assert!(config.selection.season.is_none());
        assert!(config.selection.team.is_none());
    }

    #[test]
    fn full_config() {
        let text = r#"
[data]
matches = "/abs/matches.csv"
players = "players.csv"
delimiter = ";"
match_layout = "extended"

[selection]
league = "Super League"
season = 2024
team = "FC Basel"
preferred_league = "Super League"
preferred_team = "Basel"

[report]
top_scorers = 10
format = "json"
"#;
        let config = parse(text).expect("full config should parse");
        assert_eq!(config.data.matches, PathBuf::from("/abs/matches.csv"));
        assert_eq!(config.data.players, PathBuf::from("/base/players.csv"));
        assert_eq!(config.data.delimiter, b';');
        assert_eq!(config.data.match_layout, MatchLayout::Extended);
        assert_eq!(config.selection.league.as_deref(), Some("Super League"));
        assert_eq!(config.selection.season, Some(2024));
        assert_eq!(config.selection.team.as_deref(), Some("FC Basel"));
        assert_eq!(config.selection.preferred_team.as_deref(), Some("Basel"));
        assert_eq!(config.output.top_scorers, 10);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let err = parse("[data\nmatches = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn parse_error_for_missing_data_section() {
        let err = parse("[report]\ntop_scorers = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn parse_error_for_unknown_layout() {
        let text = format!("{MINIMAL}match_layout = \"sideways\"\n");
        let err = parse(&text).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    // -- Validation --

    #[test]
    fn rejects_zero_top_scorers() {
        let text = format!("{MINIMAL}\n[report]\ntop_scorers = 0\n");
        match parse(&text).unwrap_err() {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "report.top_scorers");
            }
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_matches_path() {
        let text = "[data]\nmatches = \"  \"\nplayers = \"p.csv\"\n";
        match parse(text).unwrap_err() {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "data.matches"),
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_ascii_delimiter() {
        let text = format!("{MINIMAL}delimiter = \"§\"\n");
        match parse(&text).unwrap_err() {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "data.delimiter"),
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_league() {
        let text = format!("{MINIMAL}\n[selection]\nleague = \"\"\n");
        match parse(&text).unwrap_err() {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "selection.league"),
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    // -- Files on disk --

    #[test]
    fn file_not_found_for_missing_report_toml() {
        let tmp = scratch_dir("missing_file");
        let err = load_config_from(&tmp).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn seeds_config_from_defaults_on_first_run() {
        let tmp = scratch_dir("seed_defaults");
        fs::create_dir_all(tmp.join("defaults")).unwrap();
        fs::write(tmp.join("defaults").join(CONFIG_FILE), MINIMAL).unwrap();
        fs::write(tmp.join("defaults/notes.toml.example"), "x = 1").unwrap();

        let seeded = ensure_config_file(&tmp).unwrap();
        assert_eq!(seeded, Some(tmp.join("config").join(CONFIG_FILE)));
        assert!(!tmp.join("config/notes.toml.example").exists());

        let config = load_config(&tmp).expect("seeded config should load");
        assert_eq!(config.data.matches, tmp.join("data/matches.csv"));

        // Second run leaves it alone.
        assert_eq!(ensure_config_file(&tmp).unwrap(), None);
    }

    #[test]
    fn existing_config_is_not_overwritten() {
        let tmp = scratch_dir("keep_existing");
        fs::create_dir_all(tmp.join("defaults")).unwrap();
        fs::create_dir_all(tmp.join("config")).unwrap();
        fs::write(tmp.join("defaults").join(CONFIG_FILE), MINIMAL).unwrap();
        let custom = format!("{MINIMAL}\n[report]\ntop_scorers = 9\n");
        fs::write(tmp.join("config").join(CONFIG_FILE), &custom).unwrap();

        assert_eq!(ensure_config_file(&tmp).unwrap(), None);
        let config = load_config(&tmp).unwrap();
        assert_eq!(config.output.top_scorers, 9);
    }

    #[test]
    fn existing_config_without_defaults_is_ok() {
        let tmp = scratch_dir("no_defaults");
        fs::create_dir_all(tmp.join("config")).unwrap();
        fs::write(tmp.join("config").join(CONFIG_FILE), MINIMAL).unwrap();
        assert_eq!(ensure_config_file(&tmp).unwrap(), None);
    }

    #[test]
    fn errors_without_config_or_defaults() {
        let tmp = scratch_dir("no_dirs");
        let err = ensure_config_file(&tmp).unwrap_err();
        assert!(matches!(err, ConfigError::DefaultsCopyError { .. }));

        // An empty config/ directory is no better.
        fs::create_dir_all(tmp.join("config")).unwrap();
        let err = load_config(&tmp).unwrap_err();
        assert!(matches!(err, ConfigError::DefaultsCopyError { .. }));
    }

    #[test]
    fn shipped_defaults_are_valid() {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let text = fs::read_to_string(root.join("defaults").join(CONFIG_FILE))
            .expect("defaults/report.toml should exist");
        let config = parse_config(&text, Path::new("defaults/report.toml"), &root)
            .expect("shipped defaults should parse");
        assert_eq!(config.data.matches, root.join("data/matches.csv"));
        assert_eq!(config.output.top_scorers, 5);
    }
}
