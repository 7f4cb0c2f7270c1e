//! Runtime configuration: where the database lives and which season is "current".

use crate::cli::types::Season;
use crate::error::{Result, StatsError};
use crate::storage::LeaderboardSettings;
use std::{env, path::PathBuf};

/// Environment variable overriding the database file location
pub const DATABASE_ENV_VAR: &str = "NFL_STATS_DB";

/// Environment variable overriding the default season
pub const SEASON_ENV_VAR: &str = "NFL_STATS_SEASON";

const DATA_DIR_NAME: &str = "nfl-stats";
const DATABASE_FILE_NAME: &str = "nfl_stats.sqlite";

/// Settings shared by every command of one process run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsConfig {
    /// Explicit database path from the environment, if set
    pub database_path: Option<PathBuf>,
    pub default_season: Season,
    pub leaderboard: LeaderboardSettings,
}

impl StatsConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `NFL_STATS_DB`: database file
    /// - `NFL_STATS_SEASON`: season used when a command omits `--season`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = env::var_os(DATABASE_ENV_VAR).filter(|p| !p.is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(season) = read_env::<Season>(SEASON_ENV_VAR) {
            config.default_season = season;
        }

        config
    }

    /// Database file to open: the `--db` flag wins over the environment, which
    /// wins over the platform data directory.
    pub fn resolve_database_path(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        resolve_database_path(flag, self.database_path.clone(), dirs::data_dir())
    }
}

fn resolve_database_path(
    flag: Option<PathBuf>,
    from_env: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = flag.or(from_env) {
        return Ok(path);
    }

    data_dir
        .map(|dir| dir.join(DATA_DIR_NAME).join(DATABASE_FILE_NAME))
        .ok_or_else(|| StatsError::MissingDataDir {
            env_var: DATABASE_ENV_VAR.to_string(),
        })
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
