// Match statistics report entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr; stdout carries the report)
// 2. Load config (copying defaults on first run)
// 3. Import the match and player CSVs
// 4. Resolve league/season/team and build the report
// 5. Render and print

use std::path::PathBuf;

use matchstats_report::config;
use matchstats_report::import;
use matchstats_report::render;
use matchstats_report::report::{self, Selection};

use anyhow::Context;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;

    // 2. Load config
    let base_dir = match parse_config_dir_arg() {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to resolve working directory")?,
    };
    let config = config::load_config(&base_dir).context("failed to load configuration")?;
    info!(
        "Config loaded from {}: matches={}, players={}",
        base_dir.display(),
        config.data.matches.display(),
        config.data.players.display()
    );

    // 3. Import
    let dataset = import::load_all(&config.data).context("failed to import data")?;

    // 4. Build the report
    let selection = Selection::resolve(&dataset.matches, &config.selection);
    let report = report::build_report(
        &dataset.matches,
        &dataset.players,
        selection,
        config.output.top_scorers,
    );

    // 5. Render
    let output =
        render::render(&report, config.output.format).context("failed to render report")?;
    print!("{output}");

    Ok(())
}

/// `--config <dir>` or `--config=<dir>`: the directory holding `config/`,
/// `defaults/` and the data files referenced by relative paths.
fn parse_config_dir_arg() -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix("--config=") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == "--config" {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(PathBuf::from(next));
            }
        }
    }
    None
}

/// Initialize tracing on stderr so it never interleaves with the report.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("matchstats_report=info,matchstats_core=info,warn")
            }),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
