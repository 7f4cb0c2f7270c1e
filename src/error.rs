//! Error types for the NFL stats dashboard

use rusqlite::ErrorCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Database error: {0}")]
    Database(rusqlite::Error),

    #[error("Constraint violation: {message}")]
    Constraint { message: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine a data directory; set {env_var} or pass --db")]
    MissingDataDir { env_var: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("Team not found: {team}")]
    TeamNotFound { team: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid season type: {value} (expected REG or POST)")]
    InvalidSeasonType { value: String },

    #[error("Invalid leaderboard kind: {kind}")]
    InvalidLeaderboardKind { kind: String },

    #[error("Invalid stat category: {category}")]
    InvalidStatCategory { category: String },

    #[error("Invalid team code: {code:?}")]
    InvalidTeamCode { code: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

impl StatsError {
    /// True for unique/foreign-key/check violations reported by SQLite.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StatsError::Constraint { .. })
    }
}

impl From<rusqlite::Error> for StatsError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref failure, ref message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                StatsError::Constraint {
                    message: message.clone().unwrap_or_else(|| failure.to_string()),
                }
            }
            other => StatsError::Database(other),
        }
    }
}
