//! Leaderboard command implementation

use super::common::{format_yards, CommandContext};
use crate::{
    cli::{types::LeaderboardKind, LeaderboardOverrides, SeasonArg},
    dashboard,
    storage::LeaderboardEntry,
    Result, Season,
};

/// Handle `get leaderboard`
pub fn handle_leaderboard(
    ctx: &CommandContext,
    kind: LeaderboardKind,
    season: &SeasonArg,
    overrides: &LeaderboardOverrides,
) -> Result<()> {
    let season = ctx.season(season);
    let settings = ctx.leaderboard_settings(overrides);
    let entries = dashboard::list_leaderboard_with(&ctx.db, kind, season, &settings);

    ctx.emit(&entries, |entries| format_leaderboard(kind, season, entries))
}

/// Render a leaderboard as a numbered list
pub fn format_leaderboard(kind: LeaderboardKind, season: Season, entries: &[LeaderboardEntry]) -> String {
    let mut out = if kind.is_all_time() {
        kind.title().to_string()
    } else {
        format!("{} ({})", kind.title(), season)
    };

    if entries.is_empty() {
        out.push_str("\n  No players found.");
        return out;
    }

    for (rank, entry) in entries.iter().enumerate() {
        let value = match kind {
            LeaderboardKind::AllTimeTds => format!("{:.0} TDs", entry.value),
            LeaderboardKind::LowestInt | LeaderboardKind::LowestIntAll => {
                format!("{:.3} INT/game", entry.value)
            }
            _ => format!("{} yds", format_yards(entry.value)),
        };
        out.push_str(&format!("\n{:>3}. {:<28} {}", rank + 1, entry.player_name, value));
        if let Some(tds) = entry.total_touchdowns {
            out.push_str(&format!(" ({} TDs)", tds));
        }
    }
    out
}
