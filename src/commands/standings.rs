//! Standings, best coaches and division passing leaders

use super::common::{format_yards, CommandContext};
use crate::{
    cli::SeasonArg,
    dashboard,
    storage::{CoachRecord, DivisionPassingLeader, DivisionWinner},
    Result, Season,
};

/// Handle `get standings`
pub fn handle_standings(ctx: &CommandContext, season: &SeasonArg) -> Result<()> {
    let season = ctx.season(season);
    let winners = dashboard::get_standings(&ctx.db, season);
    ctx.emit(&winners, |winners| format_standings(season, winners))
}

/// Handle `get best-coaches`
pub fn handle_best_coaches(ctx: &CommandContext, limit: u32) -> Result<()> {
    let coaches = dashboard::get_best_coaches(&ctx.db, limit);
    ctx.emit(&coaches, |coaches| format_best_coaches(coaches))
}

/// Handle `get division-passing`
pub fn handle_division_passing(
    ctx: &CommandContext,
    conference: &str,
    division: &str,
    season: &SeasonArg,
    limit: u32,
) -> Result<()> {
    let season = ctx.season(season);
    let leaders =
        dashboard::get_conference_passing_leaders(&ctx.db, season, conference, division, limit);
    ctx.emit(&leaders, |leaders| {
        let mut out = format!("{} {} Passing Leaders ({})", conference, division, season);
        if leaders.is_empty() {
            out.push_str("\n  No quarterbacks found.");
        }
        for (rank, leader) in leaders.iter().enumerate() {
            out.push_str(&format_passing_leader(rank + 1, leader));
        }
        out
    })
}

pub fn format_standings(season: Season, winners: &[DivisionWinner]) -> String {
    let mut out = format!("Division Winners ({})", season);
    if winners.is_empty() {
        out.push_str("\n  No teams found.");
        return out;
    }

    for winner in winners {
        out.push_str(&format!(
            "\n{:<4} {:<6} {:<4} {:<20} {:>2} W  {:>7} yds  {:>3} TDs  Coach: {}",
            winner.conference,
            winner.division,
            winner.team.as_str(),
            winner.team_name,
            winner.wins,
            format_yards(winner.total_yards),
            winner.total_tds,
            winner.coach_name.as_deref().unwrap_or("unknown"),
        ));
    }
    out
}

pub fn format_best_coaches(coaches: &[CoachRecord]) -> String {
    let mut out = String::from("Best Coaches by Wins");
    if coaches.is_empty() {
        out.push_str("\n  No coaching records found.");
        return out;
    }

    for (rank, coach) in coaches.iter().enumerate() {
        out.push_str(&format!(
            "\n{:>3}. {:<24} {:<4} {}-{}  titles: {}",
            rank + 1,
            coach.coach_name,
            coach.team.as_str(),
            coach.total_wins,
            coach.total_losses,
            coach.championship_wins,
        ));
    }
    out
}

fn format_passing_leader(rank: usize, leader: &DivisionPassingLeader) -> String {
    format!(
        "\n{:>3}. {:<28} {:<20} {} yds",
        rank,
        leader.player_name,
        leader.team_name,
        format_yards(leader.total_yards)
    )
}
