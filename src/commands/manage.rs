//! Write commands: teams, players, stat lines, coaches and games

use serde::Serialize;
use tracing::info;

use super::common::{outcome_line, CommandContext};
use crate::{
    cli::{ManageCmd, NewPlayerArgs, StatLineArgs},
    dashboard,
    storage::{Coach, Game, Player, PlayerGameStats, PlayerUpdate, Team, TeamMove, TeamUpdate},
    Result,
};

/// Result line of one write command
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ManageOutcome {
    pub action: String,
    pub ok: bool,
}

/// Handle `manage ...`; returns whether the write succeeded
pub fn handle_manage(ctx: &mut CommandContext, cmd: ManageCmd) -> Result<bool> {
    let outcome = apply(ctx, cmd);
    info!(action = %outcome.action, ok = outcome.ok, "manage command finished");
    ctx.emit(&outcome, |outcome| outcome_line(outcome.ok, &outcome.action))?;
    Ok(outcome.ok)
}

/// Run one write command against the context's database
pub fn apply(ctx: &mut CommandContext, cmd: ManageCmd) -> ManageOutcome {
    let (action, ok) = match cmd {
        // Opening the context already created the schema
        ManageCmd::Init => (
            match ctx.db.path() {
                Some(path) => format!("Initialize database at {}", path.display()),
                None => "Initialize in-memory database".to_string(),
            },
            true,
        ),

        ManageCmd::AddTeam {
            team,
            name,
            city,
            conference,
            division,
        } => {
            let ok = dashboard::add_team(
                &mut ctx.db,
                &Team {
                    team: team.clone(),
                    team_name: name,
                    city,
                    conference,
                    division,
                },
            );
            (format!("Add team {}", team), ok)
        }

        ManageCmd::UpdateTeam { team, city, name } => {
            let changes = TeamUpdate {
                city,
                team_name: name,
            };
            let ok = dashboard::update_team(&mut ctx.db, &team, &changes);
            (format!("Update team {}", team), ok)
        }

        ManageCmd::AddPlayer { player } => add_player(ctx, player),

        ManageCmd::UpdatePlayer {
            player_id,
            team,
            week,
            season,
            position,
            weight,
            name,
        } => {
            let changes = PlayerUpdate {
                player_name: name,
                position,
                weight,
                team: team.map(|team| TeamMove {
                    team,
                    season: ctx.season(&season),
                    week,
                }),
            };
            let ok = dashboard::update_player(&mut ctx.db, &player_id, &changes);
            (format!("Update player {}", player_id), ok)
        }

        ManageCmd::DeletePlayer { player_id } => (
            format!("Delete player {}", player_id),
            dashboard::delete_player(&mut ctx.db, &player_id),
        ),

        ManageCmd::AddStats { line } => add_stats(ctx, line),

        ManageCmd::DeleteStats {
            player_id,
            season,
            week,
        } => (
            format!("Delete stats for {} ({} week {})", player_id, season, week),
            dashboard::delete_player_game_stats(&mut ctx.db, &player_id, season, week),
        ),

        ManageCmd::AddCoach {
            coach_id,
            name,
            team,
            season,
        } => {
            let season = ctx.season(&season);
            let ok = dashboard::add_coach(&mut ctx.db, &Coach { coach_id, name }, &team, season);
            (format!("Add coach {} to {}", coach_id, team), ok)
        }

        ManageCmd::DeleteCoach { coach_id } => (
            format!("Delete coach {}", coach_id),
            dashboard::delete_coach(&mut ctx.db, coach_id),
        ),

        ManageCmd::AddGame {
            game_id,
            season,
            week,
            season_type,
            away,
            home,
            home_win,
        } => {
            let game = Game {
                game_id,
                season: ctx.season(&season),
                week,
                season_type,
                away_team: away,
                home_team: home,
                home_win,
            };
            let ok = dashboard::add_game(&mut ctx.db, &game);
            (format!("Add game {}", game.game_id), ok)
        }

        ManageCmd::DeleteGame { game_id } => (
            format!("Delete game {}", game_id),
            dashboard::delete_game(&mut ctx.db, &game_id),
        ),
    };

    ManageOutcome { action, ok }
}

fn add_player(ctx: &mut CommandContext, args: NewPlayerArgs) -> (String, bool) {
    let player = Player {
        player_id: args.player_id,
        player_name: args.name,
        position: args.position,
        birth_year: args.birth_year,
        draft_year: args.draft_year,
        draft_ovr: args.draft_ovr,
        height: args.height,
        weight: args.weight,
        team: args.team,
        season: ctx.season(&args.season),
    };
    let ok = dashboard::add_player(&mut ctx.db, &player, args.week);
    (format!("Add player {}", player.player_id), ok)
}

fn add_stats(ctx: &mut CommandContext, line: StatLineArgs) -> (String, bool) {
    let stats = PlayerGameStats {
        passing_yards: line.passing_yards,
        rushing_yards: line.rushing_yards,
        receiving_yards: line.receiving_yards,
        receptions: line.receptions,
        pass_touchdown: line.pass_touchdown,
        rush_touchdown: line.rush_touchdown,
        receiving_touchdown: line.receiving_touchdown,
        interception: line.interception,
        fumble: line.fumble,
        fumble_lost: line.fumble_lost,
        safety: line.safety,
        ..PlayerGameStats::empty(line.player_id, line.season, line.week, line.team)
    };
    let ok = dashboard::add_player_game_stats(&mut ctx.db, &stats);
    (
        format!(
            "Add stats for {} ({} week {})",
            stats.player_id, stats.season, stats.week
        ),
        ok,
    )
}
