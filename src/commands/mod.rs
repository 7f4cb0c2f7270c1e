//! Command implementations for the NFL stats CLI

pub mod common;
pub mod leaderboard;
pub mod manage;
pub mod player;
pub mod standings;
pub mod team;

use crate::{cli::GetCmd, Result};
use common::CommandContext;
use player::PlayerParams;

/// Dispatch a `get` subcommand to its handler
pub fn handle_get(ctx: &CommandContext, cmd: GetCmd) -> Result<()> {
    match cmd {
        GetCmd::Leaderboard {
            kind,
            season,
            overrides,
        } => leaderboard::handle_leaderboard(ctx, kind, &season, &overrides),

        GetCmd::Standings { season } => standings::handle_standings(ctx, &season),

        GetCmd::BestCoaches { limit } => standings::handle_best_coaches(ctx, limit),

        GetCmd::Team { team, season } => team::handle_team(ctx, &team, &season),

        GetCmd::Player {
            player_id,
            name,
            categories,
            matchups,
        } => player::handle_player(
            ctx,
            PlayerParams {
                player_id,
                name,
                categories,
                matchups,
            },
        ),

        GetCmd::Versus {
            player_id,
            opponent,
        } => player::handle_versus(ctx, &player_id, &opponent),

        GetCmd::DivisionPassing {
            conference,
            division,
            season,
            limit,
        } => standings::handle_division_passing(ctx, &conference, &division, &season, limit),
    }
}
