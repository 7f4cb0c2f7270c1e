//! Data models for the storage layer

use crate::cli::types::{CoachId, GameId, PlayerId, Position, Season, SeasonType, TeamCode, Week};
use serde::{Deserialize, Serialize};

/// Player biography stored in the `players` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub player_name: String,
    pub position: Position,
    pub birth_year: u16,
    pub draft_year: u16,
    pub draft_ovr: u16,
    pub height: u16, // inches
    pub weight: u16, // pounds
    pub team: TeamCode,
    /// Season of the player's most recent record
    pub season: Season,
}

/// One row of a player's team history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerHistoryEntry {
    pub player_id: PlayerId,
    pub season: Season,
    pub week: Week,
    pub team: TeamCode,
}

/// Box score line for one player in one week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameStats {
    pub player_id: PlayerId,
    pub season: Season,
    pub week: Week,
    pub team: TeamCode,
    pub passing_yards: f64,
    pub rushing_yards: f64,
    pub receiving_yards: f64,
    pub receptions: u32,
    pub pass_touchdown: u32,
    pub rush_touchdown: u32,
    pub receiving_touchdown: u32,
    pub interception: u32,
    pub fumble: u32,
    pub fumble_lost: u32,
    pub safety: u32,
}

impl PlayerGameStats {
    /// Zeroed stat line for a player/week, to be filled with struct update syntax.
    pub fn empty(player_id: PlayerId, season: Season, week: Week, team: TeamCode) -> Self {
        Self {
            player_id,
            season,
            week,
            team,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team: TeamCode,
    pub team_name: String,
    pub city: String,
    pub conference: String,
    pub division: String,
}

/// Field changes applied to a team in one write; `None` leaves a field as is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamUpdate {
    pub city: Option<String>,
    pub team_name: Option<String>,
}

/// A trade or signing: the new team and when it took effect
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMove {
    pub team: TeamCode,
    pub season: Season,
    pub week: Week,
}

/// Field changes applied to a player in one write; `None` leaves a field as is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerUpdate {
    pub player_name: Option<String>,
    pub position: Option<Position>,
    pub weight: Option<u16>,
    pub team: Option<TeamMove>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub coach_id: CoachId,
    pub name: String,
}

/// Whether a team's head coach slot is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachStatus {
    Active,
    Vacant,
}

impl CoachStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoachStatus::Active => "active",
            CoachStatus::Vacant => "vacant",
        }
    }
}

/// Current coaching assignment for a team.
///
/// `coach` is `None` exactly when `status` is [`CoachStatus::Vacant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachSlot {
    pub team: TeamCode,
    pub coach: Option<Coach>,
    pub status: CoachStatus,
}

/// Ledger row: who coached a team in a season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachHistoryEntry {
    pub season: Season,
    pub coach_id: CoachId,
    pub name: String,
    pub team: TeamCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: GameId,
    pub season: Season,
    pub week: Week,
    pub season_type: SeasonType,
    pub away_team: TeamCode,
    pub home_team: TeamCode,
    pub home_win: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Loss,
}

impl GameResult {
    pub fn from_won(won: bool) -> Self {
        if won {
            GameResult::Win
        } else {
            GameResult::Loss
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::Win => "Win",
            GameResult::Loss => "Loss",
        }
    }
}

/// One ranked row of a leaderboard.
///
/// `value` is the ranked statistic (summed yards, touchdowns, or interceptions
/// per game); `total_touchdowns` is only filled for the interception-rate boards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub total_touchdowns: Option<u32>,
}

/// Season passing leader within one conference/division
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionPassingLeader {
    pub player_name: String,
    pub team_name: String,
    pub total_yards: f64,
}

/// Earliest season a player appeared for a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamTenure {
    pub team: TeamCode,
    pub year_signed: Season,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassingTotals {
    pub total_passing_yards: f64,
    pub total_pass_tds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RushingTotals {
    pub total_rushing_yards: f64,
    pub total_rush_tds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivingTotals {
    pub total_receiving_yards: f64,
    pub total_receiving_tds: u32,
    pub total_receptions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnoverTotals {
    pub total_interceptions: u32,
    pub total_fumbles: u32,
    pub total_fumbles_lost: u32,
}

/// Lifetime totals; disabled categories are `None` and omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerTotals {
    pub total_games_played: u32,
    #[serde(flatten)]
    pub passing: Option<PassingTotals>,
    #[serde(flatten)]
    pub rushing: Option<RushingTotals>,
    #[serde(flatten)]
    pub receiving: Option<ReceivingTotals>,
    #[serde(flatten)]
    pub turnovers: Option<TurnoverTotals>,
}

/// Composite career profile: bio, team tenures and totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub bio: Player,
    pub teams: Vec<TeamTenure>,
    pub career_stats: CareerTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub game_id: GameId,
    pub week: Week,
    pub season_type: SeasonType,
    pub away_team: TeamCode,
    pub home_team: TeamCode,
    pub result: GameResult,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

/// One game of a player's log, seen from the player's team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupEntry {
    pub season: Season,
    pub week: Week,
    pub opponent: TeamCode,
    /// Opponent display name, falling back to the team code when the team is unknown
    pub opponent_name: String,
    pub opposing_coach: Option<String>,
    pub game_result: GameResult,
    pub passing_yards: f64,
    pub rushing_yards: f64,
    pub receiving_yards: f64,
}

/// Per-game averages for a player against one opponent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentSplit {
    pub player_name: String,
    pub opponent: TeamCode,
    pub games_played: u32,
    pub avg_pass_yards: f64,
    pub avg_pass_tds: f64,
    pub avg_ints: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionWinner {
    pub team: TeamCode,
    pub team_name: String,
    pub conference: String,
    pub division: String,
    pub coach_name: Option<String>,
    pub wins: u32,
    pub total_yards: f64,
    pub total_tds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachRecord {
    pub coach_id: CoachId,
    pub coach_name: String,
    pub team: TeamCode,
    pub total_wins: u32,
    pub total_losses: u32,
    pub championship_wins: u32,
}
