//! Shared command plumbing: opening the database and printing results.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::{
    cli::{LeaderboardOverrides, SeasonArg},
    core::StatsConfig,
    storage::{LeaderboardSettings, StatsDatabase},
    Result, Season,
};

/// Context containing the resources every command needs
pub struct CommandContext {
    pub db: StatsDatabase,
    pub config: StatsConfig,
    pub as_json: bool,
}

impl CommandContext {
    /// Open the database chosen by `--db`, the environment or the data directory
    pub fn open(config: StatsConfig, db_flag: Option<PathBuf>, as_json: bool) -> Result<Self> {
        let path = config.resolve_database_path(db_flag)?;
        debug!(path = %path.display(), "resolved database path");
        let db = StatsDatabase::open(&path)?;

        Ok(Self {
            db,
            config,
            as_json,
        })
    }

    /// Wrap an already-open database, e.g. an in-memory one
    pub fn with_database(db: StatsDatabase, config: StatsConfig, as_json: bool) -> Self {
        Self {
            db,
            config,
            as_json,
        }
    }

    /// The requested season, or the configured default
    pub fn season(&self, arg: &SeasonArg) -> Season {
        arg.season.unwrap_or(self.config.default_season)
    }

    /// Configured leaderboard settings with command-line overrides applied
    pub fn leaderboard_settings(&self, overrides: &LeaderboardOverrides) -> LeaderboardSettings {
        let mut settings = self.config.leaderboard;
        if let Some(limit) = overrides.limit {
            settings.limit = limit;
            settings.rate_limit = limit;
        }
        if let Some(min_games) = overrides.min_games {
            settings.min_games = min_games;
        }
        if let Some(min_touchdowns) = overrides.min_touchdowns {
            settings.min_touchdowns = min_touchdowns;
        }
        settings
    }

    /// Render `value` as pretty JSON or via `text`, depending on `--json`
    pub fn render<T, F>(&self, value: &T, text: F) -> Result<String>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        if self.as_json {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(text(value))
        }
    }

    /// Print the rendered output to stdout
    pub fn emit<T, F>(&self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        println!("{}", self.render(value, text)?);
        Ok(())
    }
}

/// Yards are stored as reals but read best without decimals when whole
pub fn format_yards(yards: f64) -> String {
    if yards.fract() == 0.0 {
        format!("{:.0}", yards)
    } else {
        format!("{:.1}", yards)
    }
}

/// Success/failure line for a write command
pub fn outcome_line(ok: bool, action: &str) -> String {
    if ok {
        format!("✓ {}", action)
    } else {
        format!("✗ {} failed (see log for details)", action)
    }
}
