//! Dashboard verbs.
//!
//! These are the entry points the presentation layer calls. Each verb runs one
//! storage operation against the handle it is given and never returns an
//! error: failures are logged and collapse to an empty list, `None`, a zero
//! record or `false`. Callers that need to tell "no data" apart from "storage
//! failed" should use the [`StatsDatabase`] methods directly.

use crate::cli::types::{
    CoachId, GameId, LeaderboardKind, PlayerId, Position, Season, StatCategories, TeamCode, Week,
};
use crate::error::Result;
use crate::storage::{
    CareerProfile, Coach, CoachRecord, DivisionPassingLeader, DivisionWinner, Game,
    LeaderboardEntry, LeaderboardSettings, MatchupEntry, OpponentSplit, Player, PlayerGameStats,
    PlayerUpdate, ScheduleEntry, StatsDatabase, Team, TeamRecord, TeamUpdate,
};
use tracing::{debug, error};

/// Default number of coaches returned by [`get_best_coaches`]
pub const DEFAULT_COACH_LIMIT: u32 = 5;

fn report<T>(verb: &'static str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!(verb, error = %e, "dashboard query failed");
            None
        }
    }
}

fn report_write(verb: &'static str, result: Result<()>) -> bool {
    report(verb, result).is_some()
}

/// Deletes of rows that are already gone still count as success.
fn report_delete(verb: &'static str, result: Result<bool>) -> bool {
    match report(verb, result) {
        Some(removed) => {
            if !removed {
                debug!(verb, "nothing to delete");
            }
            true
        }
        None => false,
    }
}

/// Leaderboard with the default limits and thresholds
pub fn list_leaderboard(
    db: &StatsDatabase,
    kind: LeaderboardKind,
    season: Season,
) -> Vec<LeaderboardEntry> {
    list_leaderboard_with(db, kind, season, &LeaderboardSettings::default())
}

pub fn list_leaderboard_with(
    db: &StatsDatabase,
    kind: LeaderboardKind,
    season: Season,
    settings: &LeaderboardSettings,
) -> Vec<LeaderboardEntry> {
    report("list_leaderboard", db.leaderboard(kind, season, settings)).unwrap_or_default()
}

pub fn get_team_schedule(db: &StatsDatabase, team: &TeamCode, season: Season) -> Vec<ScheduleEntry> {
    report("get_team_schedule", db.team_schedule(team, season)).unwrap_or_default()
}

/// Win/loss record; a storage failure reads as 0-0
pub fn get_team_record(db: &StatsDatabase, team: &TeamCode, season: Season) -> TeamRecord {
    report("get_team_record", db.team_record(team, season)).unwrap_or_default()
}

pub fn get_career(
    db: &StatsDatabase,
    player_id: &PlayerId,
    categories: StatCategories,
) -> Option<CareerProfile> {
    report("get_career", db.career_profile(player_id, categories)).flatten()
}

pub fn get_matchup_history(db: &StatsDatabase, player_id: &PlayerId) -> Vec<MatchupEntry> {
    report("get_matchup_history", db.matchup_history(player_id)).unwrap_or_default()
}

pub fn get_standings(db: &StatsDatabase, season: Season) -> Vec<DivisionWinner> {
    report("get_standings", db.division_winners(season)).unwrap_or_default()
}

/// Exact-name player search
pub fn find_player(db: &StatsDatabase, name: &str) -> Option<Player> {
    report("find_player", db.find_player_by_name(name)).flatten()
}

pub fn get_conference_passing_leaders(
    db: &StatsDatabase,
    season: Season,
    conference: &str,
    division: &str,
    limit: u32,
) -> Vec<DivisionPassingLeader> {
    report(
        "get_conference_passing_leaders",
        db.division_passing_leaders(season, conference, division, limit),
    )
    .unwrap_or_default()
}

pub fn get_stats_vs_opponent(
    db: &StatsDatabase,
    player_id: &PlayerId,
    opponent: &TeamCode,
) -> Option<OpponentSplit> {
    report("get_stats_vs_opponent", db.stats_vs_opponent(player_id, opponent)).flatten()
}

pub fn get_best_coaches(db: &StatsDatabase, limit: u32) -> Vec<CoachRecord> {
    report("get_best_coaches", db.best_coaches(limit)).unwrap_or_default()
}

pub fn add_team(db: &mut StatsDatabase, team: &Team) -> bool {
    report_write("add_team", db.add_team(team))
}

/// Apply several team field changes at once; nothing is written unless all succeed
pub fn update_team(db: &mut StatsDatabase, team: &TeamCode, changes: &TeamUpdate) -> bool {
    report_write("update_team", db.update_team(team, changes))
}

pub fn update_team_city(db: &mut StatsDatabase, team: &TeamCode, new_city: &str) -> bool {
    report_write("update_team_city", db.update_team_city(team, new_city))
}

pub fn update_team_name(db: &mut StatsDatabase, team: &TeamCode, new_name: &str) -> bool {
    report_write("update_team_name", db.update_team_name(team, new_name))
}

pub fn add_player(db: &mut StatsDatabase, player: &Player, week: Week) -> bool {
    report_write("add_player", db.add_player(player, week))
}

/// Apply several player field changes at once; nothing is written unless all succeed
pub fn update_player(db: &mut StatsDatabase, player_id: &PlayerId, changes: &PlayerUpdate) -> bool {
    report_write("update_player", db.update_player(player_id, changes))
}

pub fn update_player_team(
    db: &mut StatsDatabase,
    player_id: &PlayerId,
    new_team: &TeamCode,
    season: Season,
    week: Week,
) -> bool {
    report_write(
        "update_player_team",
        db.update_player_team(player_id, new_team, season, week),
    )
}

pub fn update_player_position(db: &mut StatsDatabase, player_id: &PlayerId, position: Position) -> bool {
    report_write("update_player_position", db.update_player_position(player_id, position))
}

pub fn update_player_weight(db: &mut StatsDatabase, player_id: &PlayerId, weight: u16) -> bool {
    report_write("update_player_weight", db.update_player_weight(player_id, weight))
}

pub fn update_player_name(db: &mut StatsDatabase, player_id: &PlayerId, name: &str) -> bool {
    report_write("update_player_name", db.update_player_name(player_id, name))
}

pub fn delete_player(db: &mut StatsDatabase, player_id: &PlayerId) -> bool {
    report_delete("delete_player", db.delete_player(player_id))
}

pub fn add_player_game_stats(db: &mut StatsDatabase, stats: &PlayerGameStats) -> bool {
    report_write("add_player_game_stats", db.add_player_game_stats(stats))
}

pub fn delete_player_game_stats(
    db: &mut StatsDatabase,
    player_id: &PlayerId,
    season: Season,
    week: Week,
) -> bool {
    report_delete(
        "delete_player_game_stats",
        db.delete_player_game_stats(player_id, season, week),
    )
}

pub fn add_coach(db: &mut StatsDatabase, coach: &Coach, team: &TeamCode, hire_season: Season) -> bool {
    report_write("add_coach", db.add_coach(coach, team, hire_season))
}

pub fn delete_coach(db: &mut StatsDatabase, coach_id: CoachId) -> bool {
    report_delete("delete_coach", db.delete_coach(coach_id))
}

pub fn add_game(db: &mut StatsDatabase, game: &Game) -> bool {
    report_write("add_game", db.add_game(game))
}

pub fn delete_game(db: &mut StatsDatabase, game_id: &GameId) -> bool {
    report_delete("delete_game", db.delete_game(game_id))
}
