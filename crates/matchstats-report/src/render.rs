// Report rendering: sectioned plain text for the console, or pretty JSON.

use std::fmt::Write;

use matchstats_core::stats::round_to_tenth;

use crate::config::OutputFormat;
use crate::report::Report;

/// Render `report` in the configured format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = write_text(&mut out, report);
    out
}

fn write_text(out: &mut String, report: &Report) -> std::fmt::Result {
    let scope = format!("{} {}", report.selection.league, report.selection.season);

    writeln!(out, "=== Match Data Analysis ===")?;
    writeln!(out)?;

    writeln!(out, "-- Matches: {scope} --")?;
    if report.season_matches.is_empty() {
        writeln!(out, "(no matches)")?;
    }
    for m in &report.season_matches {
        writeln!(
            out,
            "{} | {} vs {} | {}:{}",
            m.date, m.home_team, m.away_team, m.home_goals, m.away_goals
        )?;
    }
    writeln!(out)?;

    writeln!(out, "-- Goal differential per match (all) --")?;
    for line in &report.differentials {
        writeln!(
            out,
            "{} - {} | Diff: {}",
            line.home_team, line.away_team, line.differential
        )?;
    }
    writeln!(out)?;

    writeln!(out, "-- Goals per team ({scope}) --")?;
    for row in &report.team_goals {
        writeln!(out, "{:<14} | {:>3} goals", row.team, row.goals)?;
    }
    writeln!(out)?;

    if let Some(focus) = &report.team_focus {
        writeln!(
            out,
            "-- Total goals: {} in season {} --",
            focus.team, focus.season
        )?;
        writeln!(out, "{} goals", focus.goals)?;
        writeln!(out)?;
    }

    writeln!(out, "-- Top {} scorers ({scope}) --", report.top_scorers_limit)?;
    for s in &report.top_scorers {
        writeln!(out, "{}. {} | {} goals ({})", s.rank, s.player, s.goals, s.team)?;
    }
    writeln!(out)?;

    writeln!(out, "-- Average goals per match --")?;
    writeln!(out, "{:.1} goals", round_to_tenth(report.average_goals))?;
    writeln!(out)?;

    writeln!(out, "-- Table (W/D/L/GF/GA/GD/Pts) --")?;
    writeln!(
        out,
        "{:<14} | {:>2} {:>2} {:>2} | {:>3} {:>3} {:>3} | {:>3}",
        "Team", "W", "D", "L", "GF", "GA", "GD", "Pts"
    )?;
    for r in &report.standings {
        writeln!(
            out,
            "{:<14} | {:>2} {:>2} {:>2} | {:>3} {:>3} {:>3} | {:>3}",
            r.team, r.wins, r.draws, r.losses, r.goals_for, r.goals_against, r.goal_difference, r.points
        )?;
    }
    writeln!(out)?;

    let pct = report.outcomes.rounded();
    writeln!(out, "-- Home wins vs. away wins vs. draws --")?;
    writeln!(out, "Home wins: {}%", pct.home_pct)?;
    writeln!(out, "Away wins: {}%", pct.away_pct)?;
    writeln!(out, "Draws: {}%", pct.draw_pct)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
