//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{
    CoachId, GameId, LeaderboardKind, PlayerId, Position, Season, SeasonType, StatCategory,
    TeamCode, Week,
};

/// Season selection shared by most queries
#[derive(Debug, Args)]
pub struct SeasonArg {
    /// Season year (defaults to `NFL_STATS_SEASON`, then 2024).
    #[clap(long, short)]
    pub season: Option<Season>,
}

/// Optional overrides for leaderboard limits and thresholds
#[derive(Debug, Args)]
pub struct LeaderboardOverrides {
    /// Number of rows to return.
    #[clap(long, short = 'n')]
    pub limit: Option<u32>,

    /// Minimum games played for `lowest_int`.
    #[clap(long)]
    pub min_games: Option<u32>,

    /// Minimum total touchdowns for `lowest_int`.
    #[clap(long)]
    pub min_touchdowns: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Show a leaderboard: top_qbs, top_rbs, top_wrs, all_time_tds, lowest_int, lowest_int_all
    Leaderboard {
        kind: LeaderboardKind,

        #[clap(flatten)]
        season: SeasonArg,

        #[clap(flatten)]
        overrides: LeaderboardOverrides,
    },

    /// Division winners for a season
    Standings {
        #[clap(flatten)]
        season: SeasonArg,
    },

    /// Coaches ranked by total wins
    BestCoaches {
        /// Number of coaches to return.
        #[clap(long, short = 'n', default_value_t = crate::dashboard::DEFAULT_COACH_LIMIT)]
        limit: u32,
    },

    /// Regular-season schedule and overall record for a team
    Team {
        team: TeamCode,

        #[clap(flatten)]
        season: SeasonArg,
    },

    /// Career profile for a player, by ID or exact name
    Player {
        /// Player ID (e.g. `00-0033873`).
        #[clap(required_unless_present = "name")]
        player_id: Option<PlayerId>,

        /// Look the player up by exact name instead of ID.
        #[clap(long, conflicts_with = "player_id")]
        name: Option<String>,

        /// Stat categories to include (repeatable): `-c passing -c turnovers`.
        /// Defaults to the categories that fit the player's position.
        #[clap(long = "category", short = 'c')]
        categories: Option<Vec<StatCategory>>,

        /// Also list every game with opponent, coach and result.
        #[clap(long)]
        matchups: bool,
    },

    /// Per-game passing averages for a player against one opponent
    Versus {
        player_id: PlayerId,
        opponent: TeamCode,
    },

    /// Season passing leaders within one conference division
    DivisionPassing {
        /// Conference (e.g. AFC).
        conference: String,

        /// Division within the conference (e.g. West).
        division: String,

        #[clap(flatten)]
        season: SeasonArg,

        /// Number of rows to return.
        #[clap(long, short = 'n', default_value_t = 5)]
        limit: u32,
    },
}

#[derive(Debug, Subcommand)]
pub enum ManageCmd {
    /// Create the database file and tables if missing
    Init,

    /// Add a team (its coach slot starts vacant)
    AddTeam {
        team: TeamCode,

        #[clap(long)]
        name: String,

        #[clap(long)]
        city: String,

        #[clap(long)]
        conference: String,

        #[clap(long)]
        division: String,
    },

    /// Rename a team or move it to another city
    UpdateTeam {
        team: TeamCode,

        #[clap(long)]
        city: Option<String>,

        #[clap(long)]
        name: Option<String>,
    },

    /// Add a player and their first team history entry
    AddPlayer {
        #[clap(flatten)]
        player: NewPlayerArgs,
    },

    /// Update a player's team, position, weight or name
    UpdatePlayer {
        player_id: PlayerId,

        /// Move the player to this team (records a history entry).
        #[clap(long)]
        team: Option<TeamCode>,

        /// Week the team change takes effect.
        #[clap(long, short, default_value_t = Week::default())]
        week: Week,

        #[clap(flatten)]
        season: SeasonArg,

        #[clap(long, short = 'p')]
        position: Option<Position>,

        #[clap(long)]
        weight: Option<u16>,

        #[clap(long)]
        name: Option<String>,
    },

    /// Delete a player with their history and stat lines
    DeletePlayer { player_id: PlayerId },

    /// Record one player's stat line for a week
    AddStats {
        #[clap(flatten)]
        line: StatLineArgs,
    },

    /// Delete one player's stat line for a week
    DeleteStats {
        player_id: PlayerId,

        #[clap(long, short)]
        season: Season,

        #[clap(long, short)]
        week: Week,
    },

    /// Install a head coach for a team
    AddCoach {
        coach_id: CoachId,

        #[clap(long)]
        name: String,

        #[clap(long)]
        team: TeamCode,

        #[clap(flatten)]
        season: SeasonArg,
    },

    /// Remove a coach, leaving their team's slot vacant
    DeleteCoach { coach_id: CoachId },

    /// Record a game result
    AddGame {
        game_id: GameId,

        #[clap(flatten)]
        season: SeasonArg,

        #[clap(long, short)]
        week: Week,

        /// REG or POST.
        #[clap(long, default_value_t = SeasonType::Regular)]
        season_type: SeasonType,

        #[clap(long)]
        away: TeamCode,

        #[clap(long)]
        home: TeamCode,

        /// The home team won (omit when the away team won).
        #[clap(long)]
        home_win: bool,
    },

    /// Delete a game
    DeleteGame { game_id: GameId },
}

#[derive(Debug, Args)]
pub struct NewPlayerArgs {
    pub player_id: PlayerId,

    #[clap(long)]
    pub name: String,

    #[clap(long, short = 'p')]
    pub position: Position,

    #[clap(long)]
    pub team: TeamCode,

    #[clap(flatten)]
    pub season: SeasonArg,

    /// Week the player joins the team.
    #[clap(long, short, default_value_t = Week::default())]
    pub week: Week,

    #[clap(long, default_value_t = 0)]
    pub birth_year: u16,

    #[clap(long, default_value_t = 0)]
    pub draft_year: u16,

    /// Overall draft pick.
    #[clap(long, default_value_t = 0)]
    pub draft_ovr: u16,

    /// Height in inches.
    #[clap(long, default_value_t = 0)]
    pub height: u16,

    /// Weight in pounds.
    #[clap(long, default_value_t = 0)]
    pub weight: u16,
}

#[derive(Debug, Args)]
pub struct StatLineArgs {
    pub player_id: PlayerId,

    /// Team the player played for that week.
    #[clap(long)]
    pub team: TeamCode,

    #[clap(long, short)]
    pub season: Season,

    #[clap(long, short)]
    pub week: Week,

    #[clap(long, default_value_t = 0.0)]
    pub passing_yards: f64,

    #[clap(long, default_value_t = 0.0)]
    pub rushing_yards: f64,

    #[clap(long, default_value_t = 0.0)]
    pub receiving_yards: f64,

    #[clap(long, default_value_t = 0)]
    pub receptions: u32,

    #[clap(long, default_value_t = 0)]
    pub pass_touchdown: u32,

    #[clap(long, default_value_t = 0)]
    pub rush_touchdown: u32,

    #[clap(long, default_value_t = 0)]
    pub receiving_touchdown: u32,

    #[clap(long, default_value_t = 0)]
    pub interception: u32,

    #[clap(long, default_value_t = 0)]
    pub fumble: u32,

    #[clap(long, default_value_t = 0)]
    pub fumble_lost: u32,

    #[clap(long, default_value_t = 0)]
    pub safety: u32,
}

#[derive(Debug, Parser)]
#[clap(name = "nfl-stats", about = "NFL stats dashboard CLI", version)]
pub struct NflStats {
    /// SQLite database file (or set `NFL_STATS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Log debug output to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query leaderboards, standings, teams and players
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Add, update and delete stored records
    Manage {
        #[clap(subcommand)]
        cmd: ManageCmd,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leaderboard() {
        let app = NflStats::try_parse_from([
            "nfl-stats", "--json", "get", "leaderboard", "top-rbs", "--season", "2023", "-n", "3",
        ])
        .unwrap();

        assert!(app.json);
        match app.command {
            Commands::Get {
                cmd: GetCmd::Leaderboard { kind, season, overrides },
            } => {
                assert_eq!(kind, LeaderboardKind::TopRbs);
                assert_eq!(season.season, Some(Season::new(2023)));
                assert_eq!(overrides.limit, Some(3));
                assert_eq!(overrides.min_games, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_player_by_name() {
        let app = NflStats::try_parse_from([
            "nfl-stats", "get", "player", "--name", "Patrick Mahomes", "-c", "passing",
        ])
        .unwrap();

        match app.command {
            Commands::Get {
                cmd: GetCmd::Player { player_id, name, categories, matchups },
            } => {
                assert!(player_id.is_none());
                assert_eq!(name.as_deref(), Some("Patrick Mahomes"));
                assert_eq!(categories, Some(vec![StatCategory::Passing]));
                assert!(!matchups);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_player_requires_id_or_name() {
        assert!(NflStats::try_parse_from(["nfl-stats", "get", "player"]).is_err());
    }

    #[test]
    fn test_parse_add_game_defaults() {
        let app = NflStats::try_parse_from([
            "nfl-stats", "--db", "/tmp/test.sqlite", "manage", "add-game", "2024_01_BAL_KC",
            "-s", "2024", "-w", "1", "--away", "bal", "--home", "kc", "--home-win",
        ])
        .unwrap();

        assert_eq!(app.db, Some(PathBuf::from("/tmp/test.sqlite")));
        match app.command {
            Commands::Manage {
                cmd: ManageCmd::AddGame { season_type, away, home, home_win, .. },
            } => {
                assert_eq!(season_type, SeasonType::Regular);
                assert_eq!(away, TeamCode::new("BAL"));
                assert_eq!(home, TeamCode::new("KC"));
                assert!(home_win);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_team_code_rejected() {
        assert!(NflStats::try_parse_from(["nfl-stats", "get", "team", "K-C"]).is_err());
    }
}
