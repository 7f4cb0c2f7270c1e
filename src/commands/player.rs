//! Player career, matchup log and head-to-head command implementations

use serde::Serialize;

use super::common::{format_yards, CommandContext};
use crate::{
    cli::types::{StatCategories, StatCategory},
    dashboard,
    storage::{CareerProfile, MatchupEntry, OpponentSplit, Player},
    PlayerId, Result, TeamCode,
};

/// Parameters for `get player`
#[derive(Debug, Default)]
pub struct PlayerParams {
    pub player_id: Option<PlayerId>,
    pub name: Option<String>,
    pub categories: Option<Vec<StatCategory>>,
    pub matchups: bool,
}

/// Combined output of `get player`
#[derive(Debug, Serialize)]
pub struct PlayerReport {
    pub career: CareerProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matchups: Option<Vec<MatchupEntry>>,
}

/// Handle `get player`
pub fn handle_player(ctx: &CommandContext, params: PlayerParams) -> Result<()> {
    let report = build_player_report(ctx, &params)?;
    let label = params
        .player_id
        .as_ref()
        .map(ToString::to_string)
        .or(params.name)
        .unwrap_or_default();

    ctx.emit(&report, |report| match report {
        Some(report) => format_player_report(report),
        None => format!("Player not found: {}", label),
    })
}

/// Look the player up and assemble their career (and optionally matchups)
pub fn build_player_report(ctx: &CommandContext, params: &PlayerParams) -> Result<Option<PlayerReport>> {
    let player = match resolve_player(ctx, params)? {
        Some(player) => player,
        None => return Ok(None),
    };

    let categories = match &params.categories {
        Some(selected) => selected.iter().copied().collect(),
        None => StatCategories::for_position(player.position),
    };

    let career = match dashboard::get_career(&ctx.db, &player.player_id, categories) {
        Some(career) => career,
        None => return Ok(None),
    };
    let matchups = params
        .matchups
        .then(|| dashboard::get_matchup_history(&ctx.db, &player.player_id));

    Ok(Some(PlayerReport { career, matchups }))
}

fn resolve_player(ctx: &CommandContext, params: &PlayerParams) -> Result<Option<Player>> {
    match (&params.player_id, &params.name) {
        (Some(player_id), _) => ctx.db.get_player(player_id),
        (None, Some(name)) => Ok(dashboard::find_player(&ctx.db, name)),
        (None, None) => Ok(None),
    }
}

/// Handle `get versus`
pub fn handle_versus(ctx: &CommandContext, player_id: &PlayerId, opponent: &TeamCode) -> Result<()> {
    let split = dashboard::get_stats_vs_opponent(&ctx.db, player_id, opponent);
    ctx.emit(&split, |split| match split {
        Some(split) => format_split(split),
        None => format!("No games found for {} against {}", player_id, opponent),
    })
}

pub fn format_player_report(report: &PlayerReport) -> String {
    let bio = &report.career.bio;
    let totals = &report.career.career_stats;

    let mut out = format!(
        "{} ({}, {}) [{}]\nBorn {}  Drafted {} (#{})  {} in / {} lb",
        bio.player_name,
        bio.position,
        bio.team,
        bio.player_id,
        bio.birth_year,
        bio.draft_year,
        bio.draft_ovr,
        bio.height,
        bio.weight,
    );

    if !report.career.teams.is_empty() {
        let teams: Vec<String> = report
            .career
            .teams
            .iter()
            .map(|tenure| format!("{} ({})", tenure.team, tenure.year_signed))
            .collect();
        out.push_str(&format!("\nTeams: {}", teams.join(", ")));
    }

    out.push_str(&format!("\nGames played: {}", totals.total_games_played));
    if let Some(passing) = &totals.passing {
        out.push_str(&format!(
            "\nPassing:   {} yds, {} TDs",
            format_yards(passing.total_passing_yards),
            passing.total_pass_tds
        ));
    }
    if let Some(rushing) = &totals.rushing {
        out.push_str(&format!(
            "\nRushing:   {} yds, {} TDs",
            format_yards(rushing.total_rushing_yards),
            rushing.total_rush_tds
        ));
    }
    if let Some(receiving) = &totals.receiving {
        out.push_str(&format!(
            "\nReceiving: {} rec, {} yds, {} TDs",
            receiving.total_receptions,
            format_yards(receiving.total_receiving_yards),
            receiving.total_receiving_tds
        ));
    }
    if let Some(turnovers) = &totals.turnovers {
        out.push_str(&format!(
            "\nTurnovers: {} INT, {} fumbles ({} lost)",
            turnovers.total_interceptions, turnovers.total_fumbles, turnovers.total_fumbles_lost
        ));
    }

    if let Some(matchups) = &report.matchups {
        out.push_str("\n\nGame log:");
        if matchups.is_empty() {
            out.push_str("\n  No games found.");
        }
        for game in matchups {
            out.push_str(&format!(
                "\n{} wk {:>2}  vs {:<20} {:<4}  coach: {:<20} pass {} / rush {} / rec {}",
                game.season,
                game.week.as_u16(),
                game.opponent_name,
                game.game_result.as_str(),
                game.opposing_coach.as_deref().unwrap_or("-"),
                format_yards(game.passing_yards),
                format_yards(game.rushing_yards),
                format_yards(game.receiving_yards),
            ));
        }
    }

    out
}

pub fn format_split(split: &OpponentSplit) -> String {
    format!(
        "{} vs {}: {} games, {:.1} pass yds/game, {:.2} pass TDs/game, {:.2} INT/game",
        split.player_name,
        split.opponent,
        split.games_played,
        split.avg_pass_yards,
        split.avg_pass_tds,
        split.avg_ints
    )
}
