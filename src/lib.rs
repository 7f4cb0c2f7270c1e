//! NFL Stats Dashboard Library
//!
//! A query layer over a local SQLite store of NFL players, teams, coaches,
//! games and weekly box scores, with a CLI for reading and maintaining it.
//!
//! ## Features
//!
//! - **Leaderboards**: Season yardage leaders, career touchdowns and interception rates
//! - **Career Profiles**: Bio, team tenures and category-selectable lifetime totals
//! - **Schedules and Records**: Per-team game lists and win/loss counts
//! - **Matchups**: Game logs with opponent, opposing coach and result
//! - **Standings**: Division winners and coaching records
//! - **Mutations**: Transactional add/update/delete for every entity
//!
//! ## Quick Start
//!
//! ```rust
//! use nfl_stats::{dashboard, storage::StatsDatabase, LeaderboardKind, Season};
//!
//! # fn example() -> nfl_stats::Result<()> {
//! let db = StatsDatabase::new_in_memory()?;
//! let leaders = dashboard::list_leaderboard(&db, LeaderboardKind::TopRbs, Season::new(2024));
//! assert!(leaders.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file and pick the default season:
//! ```bash
//! export NFL_STATS_DB=~/nfl_stats.sqlite
//! export NFL_STATS_SEASON=2024
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    CoachId, GameId, LeaderboardKind, PlayerId, Position, Season, SeasonType, StatCategories,
    StatCategory, TeamCode, Week,
};
pub use error::{Result, StatsError};
pub use storage::StatsDatabase;
