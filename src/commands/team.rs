//! Team schedule and record command implementation

use serde::Serialize;

use super::common::CommandContext;
use crate::{
    cli::SeasonArg,
    dashboard,
    storage::{ScheduleEntry, TeamRecord},
    Result, Season, TeamCode,
};

/// Combined output of `get team`
#[derive(Debug, Serialize)]
pub struct TeamReport {
    pub team: TeamCode,
    pub season: Season,
    pub record: TeamRecord,
    pub schedule: Vec<ScheduleEntry>,
}

/// Handle `get team`
pub fn handle_team(ctx: &CommandContext, team: &TeamCode, season: &SeasonArg) -> Result<()> {
    let season = ctx.season(season);
    let report = TeamReport {
        team: team.clone(),
        season,
        record: dashboard::get_team_record(&ctx.db, team, season),
        schedule: dashboard::get_team_schedule(&ctx.db, team, season),
    };

    ctx.emit(&report, format_team_report)
}

pub fn format_team_report(report: &TeamReport) -> String {
    let mut out = format!(
        "{} {} ({}-{})",
        report.team, report.season, report.record.wins, report.record.losses
    );

    if report.schedule.is_empty() {
        out.push_str("\n  No regular-season games found.");
        return out;
    }

    for game in &report.schedule {
        let (marker, opponent) = if game.home_team == report.team {
            ("vs", &game.away_team)
        } else {
            ("@ ", &game.home_team)
        };
        out.push_str(&format!(
            "\nWeek {:>2}  {} {:<4} {}",
            game.week.as_u16(),
            marker,
            opponent.as_str(),
            game.result.as_str()
        ));
    }
    out
}
